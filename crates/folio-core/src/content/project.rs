//! Project records.

use super::ProjectRecord;

pub(super) static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "1",
        category: "AI/ML",
        title: "Smart Sports Camera",
        description: "<p>AI League Finalist project that earned recognition for innovation in sports technology.</p><p>Developed a YOLOv8-based smart camera system capable of tracking players in real-time and automatically generating sports highlight reels. The system uses computer vision to identify key moments in gameplay and creates compilation videos without manual intervention.</p><p><strong>Key Features:</strong></p><ul><li>Real-time player detection and tracking</li><li>Automated highlight generation</li><li>Multi-camera support</li><li>Performance analytics dashboard</li></ul>",
        tech: &["YOLOv8", "Python", "Computer Vision", "OpenCV", "PyTorch"],
        repo: "https://github.com/1Baleid",
        card_image: None,
        modal_image: None,
    },
    ProjectRecord {
        id: "2",
        category: "AI/ML",
        title: "LLM Human Preference Prediction",
        description: "<p>NTU Machine Learning course project (SC4000) focused on understanding and predicting human preferences for Large Language Model outputs.</p><p>Built a system that predicts which LLM-generated responses humans will prefer using knowledge distillation techniques from multiple state-of-the-art models including Gemma, LLaMA, and Qwen.</p><p><strong>Techniques Used:</strong></p><ul><li>Knowledge distillation from multiple LLMs</li><li>Preference learning and ranking</li><li>Transformer fine-tuning</li><li>Ensemble methods</li></ul>",
        tech: &["LLMs", "NLP", "PyTorch", "Transformers", "Knowledge Distillation"],
        repo: "https://github.com/1Baleid",
        card_image: None,
        modal_image: None,
    },
    ProjectRecord {
        id: "3",
        category: "AI/ML",
        title: "Oxford Flowers Classification",
        description: "<p>NTU Deep Learning course project (SC4001) implementing advanced image classification techniques on the Oxford Flowers 102 dataset.</p><p>Developed and optimized deep learning models for classifying 102 different flower species using PyTorch, achieving high accuracy through careful architecture selection and training strategies.</p><p><strong>Achievements:</strong></p><ul><li>Implemented multiple CNN architectures</li><li>Applied transfer learning from pretrained models</li><li>Data augmentation and regularization techniques</li><li>Hyperparameter optimization</li></ul>",
        tech: &["PyTorch", "CNN", "Deep Learning", "Transfer Learning", "Computer Vision"],
        repo: "https://github.com/1Baleid",
        card_image: None,
        modal_image: None,
    },
    ProjectRecord {
        id: "4",
        category: "Web Development",
        title: "ReqFlow",
        description: "<p>A lightweight, web-based requirements management system designed specifically for small teams and startups who need a simple yet effective way to track project requirements.</p><p>Features a clean, intuitive interface with role-based access control, requirement tracking, and team collaboration tools.</p><p><strong>Features:</strong></p><ul><li>Role-based access control</li><li>Requirement tracking and versioning</li><li>Team collaboration tools</li><li>Export to multiple formats</li><li>Responsive design</li></ul>",
        tech: &["HTML", "CSS", "JavaScript", "Web Development", "UI/UX"],
        repo: "https://github.com/1Baleid",
        card_image: None,
        modal_image: None,
    },
    ProjectRecord {
        id: "5",
        category: "AI/ML",
        title: "RAG System Development",
        description: "<p>Developed enterprise-grade Retrieval-Augmented Generation (RAG) systems during my time at Renad Al Majd Group.</p><p>Built knowledge management solutions using LangChain for orchestration and n8n for workflow automation, enabling organizations to leverage their internal documents with AI-powered search and question answering.</p><p><strong>Components:</strong></p><ul><li>Document ingestion and processing pipelines</li><li>Vector database integration</li><li>LLM-powered query understanding</li><li>Automated workflow triggers with n8n</li></ul>",
        tech: &["LangChain", "RAG", "n8n", "Python", "Vector Databases"],
        repo: "https://github.com/1Baleid",
        card_image: None,
        modal_image: None,
    },
    ProjectRecord {
        id: "6",
        category: "Research",
        title: "VLM Hallucination Research",
        description: "<p>Research project at SDAIA-KFUPM Joint Research Center for AI (JRCAI) focusing on evaluating and reducing hallucinations in Vision-Language Models.</p><p>Designing controlled experiments to detect, categorize, and mitigate hallucinations in VLMs when applied to domain-specific tasks in healthcare and education.</p><p><strong>Research Focus:</strong></p><ul><li>Hallucination detection methodologies</li><li>Domain-specific evaluation benchmarks</li><li>Mitigation strategies for VLMs</li><li>Healthcare and education applications</li></ul><p><strong>Supervisor:</strong> Dr. Muzammil Behzad</p>",
        tech: &["VLMs", "Research", "Healthcare AI", "Python", "Evaluation"],
        repo: "https://github.com/1Baleid",
        card_image: None,
        modal_image: None,
    },
];
