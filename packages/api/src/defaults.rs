//! Built-in datasets shown when the backend is unreachable.
//!
//! Each function returns the same records the demo backend is seeded with, so the
//! public site looks complete even with no server running. Admin screens never use
//! these; they show an empty list and an error log instead.

use crate::models::{Article, Event, EventKind, Feedback, GalleryItem, Project, Service};

fn stock_photo(id: u32) -> String {
    format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=800")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "AI in Healthcare Summit 2025".to_string(),
            description: "Join industry leaders as we explore the latest breakthroughs in AI-powered healthcare solutions, from diagnostic tools to personalized treatment plans.".to_string(),
            image: stock_photo(7947664),
            date: "2025-02-15".to_string(),
            time: "09:00 AM".to_string(),
            location: "San Francisco Convention Center".to_string(),
            kind: EventKind::Upcoming,
            max_attendees: Some(500),
            registration_link: Some("#".to_string()),
            created_at: String::new(),
        },
        Event {
            id: "2".to_string(),
            title: "Machine Learning Workshop: Hands-on Training".to_string(),
            description: "Interactive workshop covering practical machine learning implementation, from data preprocessing to model deployment in production environments.".to_string(),
            image: stock_photo(8386440),
            date: "2025-01-28".to_string(),
            time: "10:00 AM".to_string(),
            location: "AI-Solutions Training Center".to_string(),
            kind: EventKind::Upcoming,
            max_attendees: Some(50),
            registration_link: Some("#".to_string()),
            created_at: String::new(),
        },
        Event {
            id: "3".to_string(),
            title: "Future of AI in Finance Webinar".to_string(),
            description: "Virtual discussion on how artificial intelligence is transforming financial services, featuring case studies and expert insights.".to_string(),
            image: stock_photo(2599244),
            date: "2025-01-20".to_string(),
            time: "02:00 PM".to_string(),
            location: "Online Event".to_string(),
            kind: EventKind::Upcoming,
            max_attendees: Some(1000),
            registration_link: Some("#".to_string()),
            created_at: String::new(),
        },
        Event {
            id: "4".to_string(),
            title: "AI Innovation Awards Ceremony".to_string(),
            description: "Celebrating outstanding achievements in artificial intelligence innovation and recognizing pioneers who are shaping the future of technology.".to_string(),
            image: stock_photo(8386434),
            date: "2024-11-10".to_string(),
            time: "07:00 PM".to_string(),
            location: "Grand Hotel Ballroom".to_string(),
            kind: EventKind::Past,
            max_attendees: Some(300),
            registration_link: None,
            created_at: String::new(),
        },
        Event {
            id: "5".to_string(),
            title: "Computer Vision Masterclass".to_string(),
            description: "Comprehensive training session on computer vision applications, covering object detection, image classification, and real-world implementations.".to_string(),
            image: stock_photo(8386422),
            date: "2024-10-25".to_string(),
            time: "09:30 AM".to_string(),
            location: "Tech Campus Auditorium".to_string(),
            kind: EventKind::Past,
            max_attendees: Some(150),
            registration_link: None,
            created_at: String::new(),
        },
        Event {
            id: "6".to_string(),
            title: "AI Ethics and Governance Panel".to_string(),
            description: "Important discussion on responsible AI development, ethical considerations, and governance frameworks for artificial intelligence systems.".to_string(),
            image: stock_photo(7947665),
            date: "2024-09-15".to_string(),
            time: "03:00 PM".to_string(),
            location: "University Research Center".to_string(),
            kind: EventKind::Past,
            max_attendees: Some(200),
            registration_link: None,
            created_at: String::new(),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "Smart Healthcare Assistant".to_string(),
            description: "AI-powered diagnostic assistant helping doctors make faster and more accurate diagnoses using machine learning and computer vision.".to_string(),
            image: stock_photo(7947664),
            category: "Healthcare".to_string(),
            completion_date: "2024-12-15".to_string(),
            client: "MedTech Solutions".to_string(),
            technologies: strings(&["Python", "TensorFlow", "Computer Vision", "NLP"]),
            created_at: String::new(),
        },
        Project {
            id: "2".to_string(),
            name: "Financial Fraud Detection System".to_string(),
            description: "Real-time fraud detection system that processes millions of transactions daily with 99.8% accuracy using advanced machine learning algorithms.".to_string(),
            image: stock_photo(8386440),
            category: "Finance".to_string(),
            completion_date: "2024-11-20".to_string(),
            client: "SecureBank Corp".to_string(),
            technologies: strings(&["Python", "Apache Kafka", "MLOps", "Real-time Analytics"]),
            created_at: String::new(),
        },
        Project {
            id: "3".to_string(),
            name: "Smart Manufacturing Optimizer".to_string(),
            description: "IoT-enabled predictive maintenance system that reduced equipment downtime by 40% and increased overall efficiency.".to_string(),
            image: stock_photo(2599244),
            category: "Manufacturing".to_string(),
            completion_date: "2024-10-30".to_string(),
            client: "Industrial Dynamics".to_string(),
            technologies: strings(&["IoT", "Predictive Analytics", "Edge Computing", "Dashboard"]),
            created_at: String::new(),
        },
        Project {
            id: "4".to_string(),
            name: "E-commerce Recommendation Engine".to_string(),
            description: "Personalized product recommendation system that increased conversion rates by 35% using collaborative filtering and deep learning.".to_string(),
            image: stock_photo(8386434),
            category: "E-commerce".to_string(),
            completion_date: "2024-09-15".to_string(),
            client: "ShopSmart Inc".to_string(),
            technologies: strings(&["Recommendation Systems", "Deep Learning", "A/B Testing", "Analytics"]),
            created_at: String::new(),
        },
        Project {
            id: "5".to_string(),
            name: "Autonomous Vehicle Navigation".to_string(),
            description: "Advanced computer vision and sensor fusion system for autonomous vehicle navigation with real-time obstacle detection.".to_string(),
            image: stock_photo(8386422),
            category: "Automotive".to_string(),
            completion_date: "2024-08-22".to_string(),
            client: "AutoTech Innovations".to_string(),
            technologies: strings(&["Computer Vision", "Sensor Fusion", "Real-time Processing", "Safety Systems"]),
            created_at: String::new(),
        },
        Project {
            id: "6".to_string(),
            name: "Climate Data Analytics Platform".to_string(),
            description: "Large-scale climate data processing and visualization platform helping researchers analyze environmental patterns and trends.".to_string(),
            image: stock_photo(7947665),
            category: "Environment".to_string(),
            completion_date: "2024-07-10".to_string(),
            client: "Climate Research Institute".to_string(),
            technologies: strings(&["Big Data", "Data Visualization", "Cloud Computing", "Statistical Analysis"]),
            created_at: String::new(),
        },
    ]
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            title: "The Future of AI in Healthcare: Transforming Patient Care".to_string(),
            description: "Explore how artificial intelligence is revolutionizing healthcare delivery, from diagnostic accuracy to personalized treatment plans and improved patient outcomes.".to_string(),
            image: stock_photo(7947664),
            author: "Dr. Sarah Johnson".to_string(),
            publish_date: "2024-12-01".to_string(),
            read_time: "8 min read".to_string(),
            category: "Healthcare".to_string(),
            external_link: Some("#".to_string()),
            created_at: String::new(),
        },
        Article {
            id: "2".to_string(),
            title: "Machine Learning in Financial Services: Risk and Opportunity".to_string(),
            description: "Understanding how ML algorithms are reshaping the financial landscape, from fraud detection to algorithmic trading and customer experience enhancement.".to_string(),
            image: stock_photo(8386440),
            author: "Michael Chen".to_string(),
            publish_date: "2024-11-28".to_string(),
            read_time: "6 min read".to_string(),
            category: "Finance".to_string(),
            external_link: Some("#".to_string()),
            created_at: String::new(),
        },
        Article {
            id: "3".to_string(),
            title: "Computer Vision Applications in Modern Manufacturing".to_string(),
            description: "Discover how computer vision is enabling quality control, predictive maintenance, and automated inspection in manufacturing environments.".to_string(),
            image: stock_photo(2599244),
            author: "Emily Rodriguez".to_string(),
            publish_date: "2024-11-25".to_string(),
            read_time: "7 min read".to_string(),
            category: "Technology".to_string(),
            external_link: Some("#".to_string()),
            created_at: String::new(),
        },
        Article {
            id: "4".to_string(),
            title: "Natural Language Processing: Breaking Down Communication Barriers".to_string(),
            description: "How NLP technologies are enabling better human-computer interaction, from chatbots to real-time translation and sentiment analysis.".to_string(),
            image: stock_photo(8386434),
            author: "David Park".to_string(),
            publish_date: "2024-11-22".to_string(),
            read_time: "5 min read".to_string(),
            category: "Technology".to_string(),
            external_link: Some("#".to_string()),
            created_at: String::new(),
        },
        Article {
            id: "5".to_string(),
            title: "Ethical AI: Building Responsible Artificial Intelligence Systems".to_string(),
            description: "Examining the importance of ethical considerations in AI development, including bias prevention, transparency, and accountability.".to_string(),
            image: stock_photo(8386422),
            author: "Dr. Lisa Wang".to_string(),
            publish_date: "2024-11-20".to_string(),
            read_time: "9 min read".to_string(),
            category: "Ethics".to_string(),
            external_link: Some("#".to_string()),
            created_at: String::new(),
        },
        Article {
            id: "6".to_string(),
            title: "The Rise of Edge AI: Computing at the Source".to_string(),
            description: "Understanding edge AI deployment benefits, challenges, and real-world applications in IoT devices and autonomous systems.".to_string(),
            image: stock_photo(7947665),
            author: "James Thompson".to_string(),
            publish_date: "2024-11-18".to_string(),
            read_time: "6 min read".to_string(),
            category: "Technology".to_string(),
            external_link: Some("#".to_string()),
            created_at: String::new(),
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "1".to_string(),
            name: "AI Chatbots & Virtual Assistants".to_string(),
            description: "Intelligent conversational AI that enhances customer experience and automates support.".to_string(),
            image: stock_photo(8386440),
            features: strings(&["24/7 Customer Support", "Multi-language Support", "Integration Ready", "Analytics Dashboard"]),
            created_at: String::new(),
        },
        Service {
            id: "2".to_string(),
            name: "Machine Learning Analytics".to_string(),
            description: "Advanced data analysis and predictive modeling to drive informed business decisions.".to_string(),
            image: stock_photo(7947664),
            features: strings(&["Predictive Analytics", "Real-time Processing", "Custom Models", "Data Visualization"]),
            created_at: String::new(),
        },
        Service {
            id: "3".to_string(),
            name: "Computer Vision Solutions".to_string(),
            description: "Image and video analysis for quality control, security, and automation applications.".to_string(),
            image: stock_photo(2599244),
            features: strings(&["Object Detection", "Facial Recognition", "Quality Control", "Real-time Analysis"]),
            created_at: String::new(),
        },
        Service {
            id: "4".to_string(),
            name: "Natural Language Processing".to_string(),
            description: "Text analysis, sentiment detection, and language understanding for business insights.".to_string(),
            image: stock_photo(8386434),
            features: strings(&["Sentiment Analysis", "Text Classification", "Language Translation", "Content Generation"]),
            created_at: String::new(),
        },
        Service {
            id: "5".to_string(),
            name: "AI Process Automation".to_string(),
            description: "Streamline workflows and automate repetitive tasks with intelligent process automation.".to_string(),
            image: stock_photo(8386422),
            features: strings(&["Workflow Automation", "Document Processing", "Task Scheduling", "Integration APIs"]),
            created_at: String::new(),
        },
        Service {
            id: "6".to_string(),
            name: "AI Consulting & Strategy".to_string(),
            description: "Expert guidance on AI implementation, strategy development, and digital transformation.".to_string(),
            image: stock_photo(7947665),
            features: strings(&["Strategy Development", "Implementation Planning", "Training & Support", "ROI Analysis"]),
            created_at: String::new(),
        },
    ]
}

pub fn feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah@medtech.com".to_string(),
            company: "MedTech Solutions".to_string(),
            rating: 5,
            review: "AI-Solutions transformed our diagnostic processes completely. The accuracy and speed improvements have been remarkable, leading to better patient outcomes.".to_string(),
            approved: true,
            created_at: "2024-11-15T10:30:00Z".to_string(),
        },
        Feedback {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            email: "michael@securebank.com".to_string(),
            company: "SecureBank Corp".to_string(),
            rating: 5,
            review: "The fraud detection system has exceeded our expectations. We've seen a significant reduction in false positives while catching more actual fraud attempts.".to_string(),
            approved: true,
            created_at: "2024-11-10T14:20:00Z".to_string(),
        },
        Feedback {
            id: "3".to_string(),
            name: "Emily Rodriguez".to_string(),
            email: "emily@industrial.com".to_string(),
            company: "Industrial Dynamics".to_string(),
            rating: 4,
            review: "Excellent predictive maintenance solution. The team was professional and the implementation was smooth. Highly recommend their services.".to_string(),
            approved: true,
            created_at: "2024-11-05T09:15:00Z".to_string(),
        },
        Feedback {
            id: "4".to_string(),
            name: "David Park".to_string(),
            email: "david@shopsmart.com".to_string(),
            company: "ShopSmart Inc".to_string(),
            rating: 5,
            review: "The recommendation engine boosted our conversion rates significantly. The AI-Solutions team provided exceptional support throughout the project.".to_string(),
            approved: true,
            created_at: "2024-10-28T16:45:00Z".to_string(),
        },
    ]
}

pub fn gallery() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: "1".to_string(),
            filename: "ai-conference-2024.jpg".to_string(),
            image: stock_photo(8386440),
            category: "Events".to_string(),
            upload_date: "2024-11-20".to_string(),
            description: "AI-Solutions presenting at the Global AI Conference 2024".to_string(),
            created_at: String::new(),
        },
        GalleryItem {
            id: "2".to_string(),
            filename: "team-workshop.jpg".to_string(),
            image: stock_photo(7947664),
            category: "Team".to_string(),
            upload_date: "2024-11-18".to_string(),
            description: "Team workshop on machine learning best practices".to_string(),
            created_at: String::new(),
        },
        GalleryItem {
            id: "3".to_string(),
            filename: "office-space.jpg".to_string(),
            image: stock_photo(2599244),
            category: "Office".to_string(),
            upload_date: "2024-11-15".to_string(),
            description: "Our modern AI development workspace".to_string(),
            created_at: String::new(),
        },
        GalleryItem {
            id: "4".to_string(),
            filename: "client-meeting.jpg".to_string(),
            image: stock_photo(8386434),
            category: "Meetings".to_string(),
            upload_date: "2024-11-12".to_string(),
            description: "Strategic planning session with key clients".to_string(),
            created_at: String::new(),
        },
        GalleryItem {
            id: "5".to_string(),
            filename: "product-demo.jpg".to_string(),
            image: stock_photo(8386422),
            category: "Products".to_string(),
            upload_date: "2024-11-10".to_string(),
            description: "Live demonstration of our latest AI platform".to_string(),
            created_at: String::new(),
        },
        GalleryItem {
            id: "6".to_string(),
            filename: "awards-ceremony.jpg".to_string(),
            image: stock_photo(7947665),
            category: "Awards".to_string(),
            upload_date: "2024-11-08".to_string(),
            description: "Receiving the Innovation Excellence Award 2024".to_string(),
            created_at: String::new(),
        },
        GalleryItem {
            id: "7".to_string(),
            filename: "data-center.jpg".to_string(),
            image: stock_photo(8386440),
            category: "Infrastructure".to_string(),
            upload_date: "2024-11-05".to_string(),
            description: "State-of-the-art AI computing infrastructure".to_string(),
            created_at: String::new(),
        },
        GalleryItem {
            id: "8".to_string(),
            filename: "team-building.jpg".to_string(),
            image: stock_photo(7947664),
            category: "Team".to_string(),
            upload_date: "2024-11-03".to_string(),
            description: "Annual team building and innovation retreat".to_string(),
            created_at: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_events_split_upcoming_and_past() {
        let events = events();
        assert_eq!(events.len(), 6);
        assert_eq!(events.iter().filter(|e| e.kind == EventKind::Upcoming).count(), 3);
        assert_eq!(events.iter().filter(|e| e.kind == EventKind::Past).count(), 3);
    }

    #[test]
    fn test_past_events_have_no_registration_link() {
        for event in events() {
            match event.kind {
                EventKind::Upcoming => assert!(event.registration_link.is_some()),
                EventKind::Past => assert!(event.registration_link.is_none()),
            }
        }
    }

    #[test]
    fn test_feedback_defaults_are_approved() {
        let feedback = feedback();
        assert_eq!(feedback.len(), 4);
        assert!(feedback.iter().all(|f| f.approved));
        assert!(feedback.iter().all(|f| (1..=5).contains(&f.rating)));
    }

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(projects().len(), 6);
        assert_eq!(articles().len(), 6);
        assert_eq!(services().len(), 6);
        assert_eq!(gallery().len(), 8);
    }

    #[test]
    fn test_ids_are_unique_per_dataset() {
        fn assert_unique(ids: Vec<String>) {
            let count = ids.len();
            let set: HashSet<String> = ids.into_iter().collect();
            assert_eq!(set.len(), count);
        }

        assert_unique(events().into_iter().map(|e| e.id).collect());
        assert_unique(projects().into_iter().map(|p| p.id).collect());
        assert_unique(articles().into_iter().map(|a| a.id).collect());
        assert_unique(services().into_iter().map(|s| s.id).collect());
        assert_unique(feedback().into_iter().map(|f| f.id).collect());
        assert_unique(gallery().into_iter().map(|g| g.id).collect());
    }
}
