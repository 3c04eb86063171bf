//! Global CSS styles for Folio.
//!
//! Dark single-page portfolio aesthetic: near-black background, coral
//! accent, one stylesheet injected at the app root.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-dark: #0a0a12;
  --bg-card: #14141f;
  --bg-elevated: #1a1a2e;
  --bg-border: rgba(255, 255, 255, 0.08);

  /* Accent */
  --accent: #ff6b6b;
  --accent-soft: rgba(255, 107, 107, 0.3);
  --attach-blue: rgba(59, 130, 246, 0.9);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.45);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--bg-dark);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

img {
  display: block;
  max-width: 100%;
}

a {
  color: var(--accent);
  text-decoration: none;
}

button {
  font-family: inherit;
  cursor: pointer;
}

/* === App Shell === */
.app-shell {
  height: 100vh;
  overflow-y: auto;
  outline: none;
  scroll-behavior: smooth;
}

/* Page scroll lock while any overlay is open */
.app-shell--locked {
  overflow: hidden;
}

/* === Navigation === */
.nav {
  position: sticky;
  top: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 18px 48px;
  background: rgba(10, 10, 18, 0.85);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--bg-border);
}

.nav__brand {
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: 0.04em;
}

.nav__brand span {
  color: var(--accent);
}

.nav__links {
  display: flex;
  gap: 28px;
}

.nav__link {
  color: var(--text-secondary);
  font-size: 0.9rem;
  transition: color var(--transition-fast);
}

.nav__link:hover {
  color: var(--accent);
}

/* === Sections === */
.section {
  max-width: 1080px;
  margin: 0 auto;
  padding: 96px 32px 32px;
}

.section__title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 8px;
}

.section__subtitle {
  color: var(--text-muted);
  margin-bottom: 40px;
  font-size: 0.95rem;
}

/* === Hero === */
.hero {
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  max-width: 1080px;
  margin: 0 auto;
  padding: 0 32px;
}

.hero__greeting {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.95rem;
  margin-bottom: 12px;
}

.hero__name {
  font-size: 3.4rem;
  font-weight: 800;
  line-height: 1.1;
  margin-bottom: 16px;
}

.hero__typed {
  font-size: 1.4rem;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  min-height: 2rem;
}

.hero__cursor {
  color: var(--accent);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero__description {
  max-width: 560px;
  margin-top: 20px;
  color: var(--text-secondary);
  line-height: 1.6;
}

/* === Journey: education grid === */
.journey__grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 24px;
  margin-bottom: 64px;
}

.journey__card {
  background: var(--bg-card);
  border: 1px solid var(--bg-border);
  border-radius: 14px;
  padding: 20px;
  cursor: pointer;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.journey__card:hover {
  transform: translateY(-6px);
  border-color: var(--accent-soft);
}

.journey__card-image {
  position: relative;
  height: 120px;
  border-radius: 8px;
  overflow: hidden;
  margin-bottom: 16px;
  background: var(--bg-elevated);
}

.journey__card-date {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.8rem;
}

.journey__card-title {
  font-size: 1.1rem;
  font-weight: 600;
  margin: 6px 0;
}

.journey__card-company {
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Journey: experience timeline === */
.timeline {
  position: relative;
  padding-left: 28px;
  border-left: 2px solid var(--accent-soft);
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.timeline__item {
  position: relative;
  background: var(--bg-card);
  border: 1px solid var(--bg-border);
  border-radius: 14px;
  padding: 18px 20px;
  cursor: pointer;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.timeline__item:hover {
  transform: translateX(6px);
  border-color: var(--accent-soft);
}

.timeline__item::before {
  content: '';
  position: absolute;
  left: -35px;
  top: 26px;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: var(--accent);
}

.timeline__header {
  display: flex;
  gap: 16px;
  align-items: center;
}

.timeline__card-image {
  position: relative;
  flex: 0 0 64px;
  height: 64px;
  border-radius: 8px;
  overflow: hidden;
  background: var(--bg-elevated);
}

.timeline__date {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.8rem;
}

.timeline__title {
  font-size: 1.05rem;
  font-weight: 600;
  margin: 4px 0;
}

.timeline__company {
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Projects === */
.project-row {
  display: flex;
  gap: 20px;
  align-items: center;
  background: var(--bg-card);
  border: 1px solid var(--bg-border);
  border-radius: 14px;
  padding: 20px 24px;
  margin-bottom: 16px;
  cursor: pointer;
  transition: border-color var(--transition-normal);
}

.project-row:hover {
  border-color: var(--accent-soft);
}

.project-row__image {
  position: relative;
  flex: 0 0 96px;
  height: 72px;
  border-radius: 8px;
  overflow: hidden;
  background: var(--bg-elevated);
}

.project-row__body {
  flex: 1;
}

.project-row__category {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.project-row__title {
  font-size: 1.15rem;
  font-weight: 600;
  margin: 4px 0 8px;
}

.project-row__tech {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.project-row__tech span {
  background: var(--bg-elevated);
  border-radius: 999px;
  padding: 3px 10px;
  font-size: 0.75rem;
  color: var(--text-secondary);
}

/* === Certifications === */
.certification-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 20px;
}

.certification-card {
  position: relative;
  background: var(--bg-card);
  border: 1px solid var(--bg-border);
  border-radius: 14px;
  padding: 18px;
  cursor: pointer;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.certification-card:hover {
  transform: translateY(-4px);
  border-color: var(--accent-soft);
}

.certification-card__image {
  position: relative;
  height: 110px;
  border-radius: 8px;
  overflow: hidden;
  margin-bottom: 14px;
  background: var(--bg-elevated);
}

.certification-card__date {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.75rem;
}

.certification-card__title {
  font-size: 1rem;
  font-weight: 600;
  margin: 4px 0;
}

.certification-card__organization {
  color: var(--text-muted);
  font-size: 0.8rem;
}

/* === Card image slot === */
.card-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 8px;
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.75);
  backdrop-filter: blur(4px);
}

.modal {
  position: relative;
  width: min(640px, 92vw);
  max-height: 86vh;
  overflow-y: auto;
  background: var(--bg-elevated);
  border: 1px solid var(--bg-border);
  border-radius: 16px;
  padding: 32px;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
}

.modal__close {
  position: absolute;
  top: 14px;
  right: 14px;
  width: 36px;
  height: 36px;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.08);
  color: var(--text-primary);
  font-size: 1.1rem;
  transition: background var(--transition-fast);
}

.modal__close:hover {
  background: var(--accent);
}

.modal__image {
  position: relative;
  margin: 0 0 20px;
  border-radius: 10px;
  overflow: hidden;
  background: var(--bg-card);
  min-height: 48px;
}

.modal__image img {
  width: 100%;
  max-height: 280px;
  object-fit: contain;
}

.modal__date,
.modal__category {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.85rem;
}

.modal__title {
  font-size: 1.6rem;
  font-weight: 700;
  margin: 8px 0 4px;
}

.modal__company,
.modal__organization {
  color: var(--text-secondary);
  font-size: 0.95rem;
  margin-bottom: 16px;
}

.modal__description {
  color: var(--text-secondary);
  line-height: 1.65;
}

.modal__description p {
  margin-bottom: 12px;
}

.modal__description ul {
  margin: 0 0 12px 20px;
}

.modal__description strong {
  color: var(--text-primary);
}

.modal__tech {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
  margin: 16px 0;
}

.modal__tech span {
  background: var(--bg-card);
  border-radius: 999px;
  padding: 4px 12px;
  font-size: 0.8rem;
  color: var(--text-secondary);
}

.modal__repo {
  display: inline-block;
  margin-top: 8px;
  font-size: 0.9rem;
}

/* === Attach mode (dev only) === */
.attach-btn {
  position: absolute;
  top: 8px;
  right: 8px;
  width: 32px;
  height: 32px;
  border-radius: 50%;
  background: var(--attach-blue);
  border: none;
  color: white;
  font-size: 1rem;
  line-height: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 10;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.2);
  transition: transform var(--transition-fast);
}

.attach-btn:hover {
  transform: scale(1.1);
}

.attach-btn--modal {
  top: 12px;
  right: 12px;
  width: 40px;
  height: 40px;
}

.attach-overlay {
  position: fixed;
  inset: 0;
  z-index: 10000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.8);
}

.attach-dialog {
  background: var(--bg-elevated);
  border-radius: 16px;
  padding: 32px;
  max-width: 500px;
  width: 90%;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
}

.attach-dialog__title {
  font-size: 1.25rem;
  margin-bottom: 8px;
}

.attach-dialog__subtitle {
  color: var(--text-secondary);
  font-size: 0.875rem;
  margin-bottom: 24px;
}

.attach-dialog__preview {
  margin-bottom: 16px;
  border-radius: 8px;
  overflow: hidden;
  background: rgba(255, 255, 255, 0.05);
  min-height: 100px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.attach-dialog__preview img {
  max-width: 100%;
  max-height: 200px;
  object-fit: contain;
}

.attach-dialog__placeholder {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.attach-dialog__placeholder--error {
  color: var(--accent);
}

.attach-dialog__input {
  width: 100%;
  padding: 12px 16px;
  border-radius: 8px;
  border: 2px solid var(--bg-border);
  background: rgba(255, 255, 255, 0.05);
  color: var(--text-primary);
  font-size: 1rem;
  margin-bottom: 16px;
}

.attach-dialog__input:focus {
  outline: none;
  border-color: var(--attach-blue);
}

.attach-dialog__btns {
  display: flex;
  gap: 12px;
  justify-content: flex-end;
}

.attach-dialog__btn {
  padding: 10px 20px;
  border-radius: 8px;
  border: none;
  font-size: 0.875rem;
  font-weight: 500;
  transition: background var(--transition-fast);
}

.attach-dialog__btn--cancel {
  background: rgba(255, 255, 255, 0.1);
  color: var(--text-primary);
}

.attach-dialog__btn--save {
  background: var(--attach-blue);
  color: white;
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--bg-border);
  margin-top: 96px;
  padding: 32px 48px;
  display: flex;
  justify-content: space-between;
  color: var(--text-muted);
  font-size: 0.85rem;
}
"#;
