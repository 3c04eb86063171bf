//! Overlay stack and page scroll lock.
//!
//! One process-wide manager tracks every open overlay. Background
//! scrolling is suppressed while the reference count is above zero, so
//! overlays opened in sequence without an intervening close can never
//! leave the page permanently locked or unlocked. A single Escape
//! dispatcher closes only the topmost overlay.

/// The overlays the manager can track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    ExperienceModal,
    ProjectModal,
    CertificationModal,
    /// Dev-mode image attach dialog
    AttachDialog,
}

/// Reference-counted suppression of background scrolling.
///
/// Acquire/release instead of a boolean flag: two overlays open at once
/// hold the lock twice, and it clears only when the last one closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollLock {
    count: usize,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.count += 1;
    }

    pub fn release(&mut self) {
        if self.count == 0 {
            tracing::warn!("scroll lock released while not held");
            return;
        }
        self.count -= 1;
    }

    pub fn is_locked(&self) -> bool {
        self.count > 0
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Stack of open overlays plus the shared scroll lock.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayManager {
    stack: Vec<OverlayKind>,
    lock: ScrollLock,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `kind` as open and acquire the scroll lock.
    ///
    /// Re-opening an overlay that is already on the stack moves it to
    /// the top without acquiring the lock a second time.
    pub fn push(&mut self, kind: OverlayKind) {
        if let Some(pos) = self.stack.iter().position(|k| *k == kind) {
            self.stack.remove(pos);
            self.stack.push(kind);
            return;
        }
        self.stack.push(kind);
        self.lock.acquire();
    }

    /// Record `kind` as closed and release the scroll lock.
    ///
    /// Returns `false` (and leaves the lock alone) if the overlay was
    /// not open.
    pub fn pop(&mut self, kind: OverlayKind) -> bool {
        let Some(pos) = self.stack.iter().position(|k| *k == kind) else {
            return false;
        };
        self.stack.remove(pos);
        self.lock.release();
        true
    }

    /// The topmost open overlay, if any.
    pub fn top(&self) -> Option<OverlayKind> {
        self.stack.last().copied()
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.stack.contains(&kind)
    }

    /// Whether background scrolling should be suppressed.
    pub fn scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Handle one Escape press: pop the topmost overlay and return it
    /// so the caller can close the matching controller. No-op when
    /// nothing is open.
    pub fn handle_escape(&mut self) -> Option<OverlayKind> {
        let top = self.stack.pop()?;
        self.lock.release();
        Some(top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_refcounts_across_overlays() {
        let mut overlays = OverlayManager::new();
        overlays.push(OverlayKind::ExperienceModal);
        overlays.push(OverlayKind::AttachDialog);
        assert!(overlays.scroll_locked());

        // Closing one of two keeps the page locked
        assert!(overlays.pop(OverlayKind::ExperienceModal));
        assert!(overlays.scroll_locked());

        assert!(overlays.pop(OverlayKind::AttachDialog));
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn test_pop_unopened_overlay_is_noop() {
        let mut overlays = OverlayManager::new();
        overlays.push(OverlayKind::ProjectModal);
        assert!(!overlays.pop(OverlayKind::CertificationModal));
        assert!(overlays.scroll_locked());
    }

    #[test]
    fn test_escape_closes_only_topmost() {
        let mut overlays = OverlayManager::new();
        overlays.push(OverlayKind::CertificationModal);
        overlays.push(OverlayKind::AttachDialog);

        assert_eq!(overlays.handle_escape(), Some(OverlayKind::AttachDialog));
        assert!(overlays.is_open(OverlayKind::CertificationModal));
        assert!(overlays.scroll_locked());

        assert_eq!(
            overlays.handle_escape(),
            Some(OverlayKind::CertificationModal)
        );
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn test_escape_with_nothing_open_is_noop() {
        let mut overlays = OverlayManager::new();
        assert_eq!(overlays.handle_escape(), None);
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn test_reopen_does_not_double_lock() {
        let mut overlays = OverlayManager::new();
        overlays.push(OverlayKind::ProjectModal);
        overlays.push(OverlayKind::ProjectModal);
        assert_eq!(overlays.top(), Some(OverlayKind::ProjectModal));

        assert!(overlays.pop(OverlayKind::ProjectModal));
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn test_release_underflow_is_guarded() {
        let mut lock = ScrollLock::default();
        lock.release();
        assert!(!lock.is_locked());
        assert_eq!(lock.count(), 0);
    }
}
