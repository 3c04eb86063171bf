//! Experience and education records.
//!
//! Education entries carry an `edu` prefix on their identifier and live
//! in the same table as work experience, so both card families resolve
//! through one modal.

use super::ExperienceRecord;

/// Number of leading work-experience rows in [`ALL`]; the remainder are
/// education rows.
const TIMELINE_LEN: usize = 9;

pub(super) fn timeline() -> &'static [ExperienceRecord] {
    &ALL[..TIMELINE_LEN]
}

pub(super) fn education() -> &'static [ExperienceRecord] {
    &ALL[TIMELINE_LEN..]
}

pub(super) static ALL: &[ExperienceRecord] = &[
    ExperienceRecord {
        id: "1",
        date: "Jan 2026 - May 2026",
        title: "Research Assistant",
        company: "SDAIA-KFUPM Joint Research Center for AI (JRCAI)",
        description: "<p><strong>Project:</strong> Evaluating VLMs/LLMs Hallucination in Domain-Specific Tasks</p><p>Selected due to academic excellence. Designing controlled experiments to detect, categorize, and reduce hallucinations in Vision-Language Models for healthcare and education domains.</p><p><strong>Supervisor:</strong> Dr. Muzammil Behzad</p>",
        card_image: Some("assets/images/sdaia-jrcai.png"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "2",
        date: "Oct 2025 - Present",
        title: "SAP Generative AI Developer",
        company: "SAP | Dual Study Program | Saudi Arabia",
        description: "<p>Part of SAP's prestigious Dual Study Program, working on Generative AI solutions for enterprise applications.</p><p>Earned <strong>SAP Certified Associate</strong> certification in Generative AI Development (2025), demonstrating expertise in building AI-powered business solutions.</p>",
        card_image: Some("https://cdn.prod.website-files.com/66c8945bfb638155af230df6/66d5e83a7965368cd3bef0d4_SAP.png"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "3",
        date: "Aug 2025 - Present",
        title: "Technical Lead Intern",
        company: "Arkan | Remote",
        description: "<p>Worked on building a construction management SaaS platform.</p><p>Bridged business priorities with technical design, ensuring strategic alignment.</p><p>Advised leadership by combining technical expertise with understanding of business needs.</p>",
        card_image: Some("assets/images/arkan.png"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "4",
        date: "Jan 2026",
        title: "MENA ML Winter School 2026 Scholar",
        company: "King Abdullah University of Science and Technology (KAUST) | Thuwal, Saudi Arabia",
        description: "<p>Selected among <strong>300 participants from 2,222 applicants</strong> (13.5% acceptance rate) for the prestigious ML school hosted by King Abdullah University of Science and Technology.</p><p>Featured lectures by <strong>Google DeepMind researchers</strong> covering cutting-edge machine learning topics.</p>",
        card_image: Some("https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTte2-ZT_JSzcLjafdArm65XeFSrpA4sFkTdw&s"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "5",
        date: "Jun 2025 - Aug 2025",
        title: "AI Engineer Trainee",
        company: "Renad Al Majd Group | Riyadh, Saudi Arabia",
        description: "<p>Developed Retrieval-Augmented Generation (RAG) systems using <strong>LangChain & n8n</strong> for enterprise knowledge management and automation solutions.</p><p>Gained hands-on experience building production-ready AI systems for real business applications.</p>",
        card_image: Some("https://www.rmg-sa.com/wp-content/uploads/2023/10/512.jpg"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "6",
        date: "Jun 2025 - Aug 2025",
        title: "Project Management Assistant",
        company: "Code Link | Riyadh, Saudi Arabia",
        description: "<p>Coordinated project tasks, deliverables, and stakeholder communication.</p><p>Gained valuable experience in project coordination and cross-functional team collaboration.</p>",
        card_image: Some("assets/images/codelink.png"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "7",
        date: "Aug 2024 - Present",
        title: "Peer Tutor",
        company: "Assistant Deanship of Student Excellence and Success (SES) | KFUPM, Dhahran",
        description: "<p>Delivered <strong>140+ tutoring hours</strong> across 5 courses:</p><ul><li>ICS 108 - Object-Oriented Programming</li><li>ICS 253 - Discrete Structures</li><li>MATH 106 - Applied Calculus</li><li>ISE 291 - Introduction to Data Science</li><li>COE 292 - Introduction to Artificial Intelligence</li></ul>",
        card_image: Some("assets/images/kfupm-ses.png"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "8",
        date: "Feb 2026 - Present",
        title: "Vice President",
        company: "Artificial Intelligence for All (AIFA) Club | KFUPM",
        description: "<p>Leading initiatives to democratize AI education on campus as Vice President of the AI for All (AIFA) Club.</p><p>Organizing workshops, seminars, and hands-on sessions to help students explore and learn about artificial intelligence.</p>",
        card_image: Some("assets/images/aifa-club.png"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "9",
        date: "Mar 2025 - May 2025",
        title: "Part Time",
        company: "Net Zero | University Events",
        description: "<p>Part-time role supporting university events and initiatives related to sustainability and Net Zero goals.</p><p>Gained experience in event coordination and stakeholder engagement within an academic setting.</p>",
        card_image: Some("assets/images/net-zero.png"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "edu1",
        date: "Aug 2022 - Present",
        title: "B.S. Software Engineering",
        company: "King Fahd University of Petroleum & Minerals (KFUPM)",
        description: "<p><strong>GPA: 3.86/4.0</strong>, Dean's List</p><p>Pursuing a Bachelor's degree in Software Engineering at one of the top universities in the Middle East.</p><p><strong>Honors & Awards:</strong></p><ul><li>Physics 101 A+ Honor, SABIC Sponsored (Jun 2022)</li><li>Physics 102 A+ Honor, SABIC Sponsored (Jun 2022)</li></ul>",
        card_image: Some("https://argaamplus.s3.amazonaws.com/be72021d-9734-4f0f-bb5d-dd27b437b815.png"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "edu2",
        date: "Aug 2025 - Jan 2026",
        title: "Exchange Student - AI & Computer Science",
        company: "Nanyang Technological University (NTU), Singapore",
        description: "<p><strong>First KFUPM student</strong> chosen to represent the university in Singapore at one of Asia's top universities.</p><p>Studied Machine Learning and Deep Learning courses, gaining international exposure and building a global network in the AI community.</p><p><strong>Projects completed:</strong></p><ul><li>LLM Human Preference Prediction (SC4000 Machine Learning)</li><li>Oxford Flowers Image Classification (SC4001 Deep Learning)</li></ul><p>GEM FAIR 2025 Letter of Participation</p>",
        card_image: Some("https://i0.wp.com/postgrad.com.sg/wp-content/uploads/2019/10/NTU-School-Cover-Image-01.png?resize=760%2C497&ssl=1"),
        modal_image: None,
    },
    ExperienceRecord {
        id: "edu3",
        date: "Jan - Feb 2025",
        title: "AI Specialist Program",
        company: "King Abdullah University of Science and Technology (KAUST)",
        description: "<p>Completed intensive AI specialist program at KAUST covering advanced topics in artificial intelligence.</p><p><strong>Topics Covered:</strong></p><ul><li>Intro to AI - Linear/Logistic Regression</li><li>Advanced AI - CNNs, Generative AI</li></ul><p>Gained hands-on experience with cutting-edge AI techniques from world-class researchers.</p>",
        card_image: Some("https://media.licdn.com/dms/image/v2/C5610AQFzWKdrzdRvPw/videocover-high/videocover-high/0/1702853309863/Kaust_Squaremp4?e=2147483647&v=beta&t=W7wZnYa2j-jU4-cgIMv47qmaLWfPtBc-_ppCWejUqjo"),
        modal_image: None,
    },
];
