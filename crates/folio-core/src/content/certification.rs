//! Certification and award records.

use super::CertificationRecord;

pub(super) static CERTIFICATIONS: &[CertificationRecord] = &[
    CertificationRecord {
        id: "1",
        date: "Feb 2026",
        title: "SAP Certified Associate",
        organization: "SAP Generative AI Developer",
        description: "<p>Official SAP certification demonstrating expertise in building generative AI solutions using SAP technologies.</p><p>Validates skills in developing AI-powered business applications and integrating generative AI capabilities into enterprise systems.</p>",
        card_image: Some("https://media.licdn.com/dms/image/v2/D4E2DAQF57QCnL6IqZg/profile-treasury-document-images_1280/B4EZw3xPwlIkAU-/1/1770462185971?e=1772064000&v=beta&t=QlZIDxbqF4A7lyS7WuPdAsFx6mISBc00bsg1MLUjsmY"),
        modal_image: None,
    },
    CertificationRecord {
        id: "2",
        date: "Feb 2025",
        title: "Advanced AI Course",
        organization: "KAUST",
        description: "<p>Advanced AI certification covering Convolutional Neural Networks (CNNs) and Generative AI techniques.</p><p>Completed as part of the AI Specialist Program at King Abdullah University of Science and Technology.</p>",
        card_image: Some("https://media.licdn.com/dms/image/v2/D4D2DAQH99wuPJnGt7w/profile-treasury-document-images_1280/B4DZX5vJ1OG8AY-/1/1743651645702?e=1772064000&v=beta&t=9XGS3-URBzvV-yOVOil7dpK1AxZI4Rhcqq5dwR9BYLE"),
        modal_image: None,
    },
    CertificationRecord {
        id: "3",
        date: "Jan 2025",
        title: "Intro to AI Course",
        organization: "KAUST",
        description: "<p>Foundational AI certification covering Linear Regression and Logistic Regression.</p><p>Completed as part of the AI Specialist Program at King Abdullah University of Science and Technology.</p>",
        card_image: Some("https://media.licdn.com/dms/image/v2/D4D2DAQGOPOWmgv2UGA/profile-treasury-document-images_1280/B4DZX5uyxpGwAY-/1/1743651551471?e=1772064000&v=beta&t=KvVei5Y2ceXAeoCDF-wIQsnlcskwRStxMvYM7DxrBYU"),
        modal_image: None,
    },
    CertificationRecord {
        id: "4",
        date: "May 2025",
        title: "Certificate of Appreciation",
        organization: "AI League Finals - Tuwaiq Academy",
        description: "<p>Recognition for outstanding participation and achievement in the AI League Finals competition.</p><p>Developed a smart sports camera system using YOLOv8 for real-time player tracking and automated highlight generation.</p>",
        card_image: Some("https://media.licdn.com/dms/image/v2/D4D2DAQFVRLgetZJy-g/profile-treasury-image-shrink_800_800/B4DZbPfpVbGwAY-/0/1747237903123?e=1771671600&v=beta&t=G3cx-wdeyzhh06BkhO8vcei9Sa6x0OrV5Y_9EsBVrRo"),
        modal_image: None,
    },
    CertificationRecord {
        id: "5",
        date: "Nov 2024",
        title: "IELTS Band 6.5 (B2)",
        organization: "English Proficiency",
        description: "<p>International English Language Testing System certification demonstrating B2 level English proficiency.</p><p>Score of 6.5 indicates upper-intermediate English skills for academic and professional contexts.</p>",
        card_image: Some("https://media.licdn.com/dms/image/v2/D4D2DAQFFEsiGl6PbgA/profile-treasury-image-shrink_1280_1280/B4DZaxD5GRG8AQ-/0/1746727311944?e=1771671600&v=beta&t=tjWH8fbOP3sE0Ola3dgGgLI3pcLBwokKDXGkUxuyvl0"),
        modal_image: None,
    },
    CertificationRecord {
        id: "6",
        date: "Jul 2025",
        title: "McKinsey Forward Program",
        organization: "McKinsey & Company",
        description: "<p>Completed the McKinsey Forward program, a prestigious learning experience focused on developing problem-solving, communication, and professional skills.</p><p>Gained frameworks and methodologies used by McKinsey consultants in tackling complex business challenges.</p>",
        card_image: Some("assets/images/mckinsey-forward.png"),
        modal_image: None,
    },
    CertificationRecord {
        id: "7",
        date: "Jun 2022",
        title: "Physics 101 A+ Honor",
        organization: "SABIC Sponsored - KFUPM Physics Department",
        description: "<p>Academic excellence award for achieving A+ grade in Physics 101 course at KFUPM.</p><p>Sponsored by SABIC in recognition of outstanding academic performance in physics.</p>",
        card_image: Some("assets/images/a-phys101.jpg"),
        modal_image: None,
    },
    CertificationRecord {
        id: "8",
        date: "Jun 2022",
        title: "Physics 102 A+ Honor",
        organization: "SABIC Sponsored - KFUPM Physics Department",
        description: "<p>Academic excellence award for achieving A+ grade in Physics 102 course at KFUPM.</p><p>Sponsored by SABIC in recognition of outstanding academic performance in physics.</p>",
        card_image: Some("assets/images/a-phys102.jpg"),
        modal_image: None,
    },
    CertificationRecord {
        id: "9",
        date: "2025",
        title: "GEM FAIR 2025",
        organization: "Letter of Participation - NTU Singapore",
        description: "<p>Letter of Participation from Nanyang Technological University for participating in the Global Exchange Module (GEM) Fair 2025.</p><p>Recognized as part of the exchange program experience in Singapore.</p>",
        card_image: Some("assets/images/gemfair.png"),
        modal_image: None,
    },
    CertificationRecord {
        id: "10",
        date: "Sep 2023",
        title: "Community Work Fundamentals",
        organization: "Al Fozan Academy + Aramco",
        description: "<p>Certification in community work fundamentals jointly offered by Al Fozan Academy and Aramco.</p><p>Covered principles of community engagement, volunteer management, and social impact initiatives.</p>",
        card_image: Some("https://media.licdn.com/dms/image/v2/D4D2DAQH_iCuDAyiFyQ/profile-treasury-image-shrink_800_800/B4DZapAyQ.G4AY-/0/1746592278979?e=1771671600&v=beta&t=rHubdSi8VhHGcQF6N9xzce-RRXmTESvU-KHohpO0kUk"),
        modal_image: None,
    },
    CertificationRecord {
        id: "11",
        date: "Jan 2026",
        title: "MENA Machine Learning Winter School 2026",
        organization: "King Abdullah University of Science and Technology (KAUST)",
        description: "<p>Certificate of Participation for active participation and successful completion of the <strong>MENA Machine Learning Winter School 2026 (MenaML)</strong>.</p><p>Held at King Abdullah University of Science and Technology, Saudi Arabia, from <strong>24 - 29 January 2026</strong>.</p><p>Selected among <strong>300 participants from 2,222 applicants</strong> (13.5% acceptance rate) for this prestigious ML school.</p><p>Featured lectures by <strong>Google DeepMind researchers</strong> covering cutting-edge machine learning topics.</p><p><strong>Directors:</strong> Dr. Safa Messaoud, Maria Abi</p>",
        card_image: Some("https://media.licdn.com/dms/image/v2/D4E2DAQFzsI1Pl5-6TQ/profile-treasury-image-shrink_1280_1280/B4EZw_As1sKAAQ-/0/1770583675605?e=1771671600&v=beta&t=a8e6jiM-qJ81Mxdos0CoQOgEFnZyah5lBdr3FZIBbHM"),
        modal_image: None,
    },
];
