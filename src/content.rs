//! Static Page Content
//!
//! Copy text for every section, authored in display order.

use crate::icon_paths as icons;
use crate::models::{
    Challenge, DescriptionPoint, Difficulty, EventCategory, FocusArea, Highlight, NavItem,
    SocialIcon, SocialLink, Stat, TimelineEvent,
};

pub const EVENT_NAME: &str = "VPBank Technology Hackathon 2025";

pub const VPBANK_LOGO: &str =
    "https://w.ladicdn.com/s450x350/5c7362c6c417ab07e5196b05/vp-bank-20240215071600-nr1pe.png";
pub const AWS_LOGO: &str =
    "https://w.ladicdn.com/s450x350/5c7362c6c417ab07e5196b05/pue-20250529063413-atwmn.png";
pub const DESCRIPTIONS_IMAGE: &str =
    "https://w.ladicdn.com/s850x850/5c7362c6c417ab07e5196b05/nam-nu-ngoi-20250520032102-tel5j.png";
const POINT_ICON: &str =
    "https://w.ladicdn.com/5c7362c6c417ab07e5196b05/icon-23-20250520095931-xvnqy.png";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Overview", href: "#overview" },
    NavItem { label: "Timeline", href: "#timeline" },
    NavItem { label: "Mentors", href: "#mentors" },
];

// ========================
// Hero
// ========================

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "48 giờ", caption: "Thời gian thi đấu" },
    Stat { value: "1 tỷ VNĐ", caption: "Tổng giải thưởng" },
    Stat { value: "500+", caption: "Đội tham gia" },
];

// ========================
// About
// ========================

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "48h", caption: "Coding Marathon" },
    Stat { value: "1B+", caption: "Giải thưởng VNĐ" },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        number: "01",
        title: "Đổi mới sáng tạo",
        description: "Phát triển những ý tưởng đột phá trong lĩnh vực FinTech và Banking",
        icon: icons::ICON_LIGHT_BULB,
    },
    Highlight {
        number: "02",
        title: "Công nghệ tiên tiến",
        description: "Ứng dụng AI, Blockchain, và các công nghệ mới nhất vào giải pháp tài chính",
        icon: icons::ICON_LIGHTNING,
    },
    Highlight {
        number: "03",
        title: "Kết nối cộng đồng",
        description: "Gặp gỡ và học hỏi từ các chuyên gia hàng đầu trong ngành công nghệ",
        icon: icons::ICON_USER_GROUP,
    },
    Highlight {
        number: "04",
        title: "Cơ hội nghề nghiệp",
        description: "Khám phá cơ hội việc làm và hợp tác với VPBank và các đối tác",
        icon: icons::ICON_BRIEFCASE,
    },
];

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        emoji: "🤖",
        title: "Artificial Intelligence",
        topics: "Machine Learning, NLP, Computer Vision",
    },
    FocusArea {
        emoji: "🔗",
        title: "Blockchain",
        topics: "DeFi, Smart Contracts, Cryptocurrency",
    },
    FocusArea {
        emoji: "📱",
        title: "Mobile Banking",
        topics: "UX/UI, Security, Performance",
    },
    FocusArea {
        emoji: "☁️",
        title: "Cloud & API",
        topics: "Microservices, Integration, Scalability",
    },
];

// ========================
// Descriptions
// ========================

pub const TRACKS: &[DescriptionPoint] = &[
    DescriptionPoint {
        icon: POINT_ICON,
        title: "Junior / Fresh Track (May – August 2025)",
        description: "For fresh graduates (with a minimum \"Good\" GPA) in IT, Data Science, and related fields, with less than 2 years of experience.",
    },
    DescriptionPoint {
        icon: POINT_ICON,
        title: "Senior & Expert Track (September – December 2025)",
        description: "For technology professionals with over 2 years of experience and a passion for building impactful technological solutions.",
    },
];

pub const EXPERIENCE_POINTS: &[DescriptionPoint] = &[
    DescriptionPoint {
        icon: POINT_ICON,
        title: "Choose your own technical challenge statement",
        description: "in the banking domain and tackle it your way!",
    },
    DescriptionPoint {
        icon: POINT_ICON,
        title: "Expert mentorship:",
        description: "Be guided throughout the competition by nearly 50 experienced experts from VPBank and AWS.",
    },
    DescriptionPoint {
        icon: POINT_ICON,
        title: "Exciting rewards:",
        description: "Win attractive cash prizes from VPBank and sponsored benefits from AWS.",
    },
    DescriptionPoint {
        icon: POINT_ICON,
        title: "Hack2Hire in action:",
        description: "Gain a direct path to top-tier roles such as AI/Gen AI Engineer, DevOps Specialist, Cloud Expert, Project Manager at VPBank.",
    },
    DescriptionPoint {
        icon: POINT_ICON,
        title: "Work on huge real-life technical projects:",
        description: "Turn your ideas into reality by contributing directly to VPBank's million-dollar IT projects and take your Hackathon solution to the next level.",
    },
];

// ========================
// Challenges
// ========================

pub const CHALLENGES: &[Challenge] = &[
    Challenge {
        id: "fintech-innovation",
        title: "FinTech Innovation Challenge",
        description: "Phát triển giải pháp công nghệ tài chính sáng tạo để cải thiện trải nghiệm khách hàng trong lĩnh vực ngân hàng số.",
        difficulty: Difficulty::Advanced,
        category: "FinTech",
        technologies: &["React", "Node.js", "AI/ML", "Blockchain"],
        prize: "500,000,000 VNĐ",
        icon: icons::ICON_CURRENCY,
    },
    Challenge {
        id: "ai-banking",
        title: "AI-Powered Banking",
        description: "Xây dựng chatbot thông minh hoặc hệ thống AI để hỗ trợ khách hàng trong các giao dịch ngân hàng.",
        difficulty: Difficulty::Intermediate,
        category: "Artificial Intelligence",
        technologies: &["Python", "TensorFlow", "NLP", "API Integration"],
        prize: "300,000,000 VNĐ",
        icon: icons::ICON_LIGHT_BULB,
    },
    Challenge {
        id: "blockchain-security",
        title: "Blockchain Security",
        description: "Phát triển giải pháp bảo mật dựa trên blockchain cho các giao dịch tài chính và quản lý danh tính số.",
        difficulty: Difficulty::Advanced,
        category: "Blockchain",
        technologies: &["Solidity", "Web3", "Smart Contracts", "Ethereum"],
        prize: "400,000,000 VNĐ",
        icon: icons::ICON_LOCK,
    },
    Challenge {
        id: "mobile-banking",
        title: "Mobile Banking UX",
        description: "Thiết kế và phát triển ứng dụng mobile banking với trải nghiệm người dùng tối ưu và tính năng sáng tạo.",
        difficulty: Difficulty::Intermediate,
        category: "Mobile Development",
        technologies: &["React Native", "Flutter", "UI/UX Design", "Mobile Security"],
        prize: "250,000,000 VNĐ",
        icon: icons::ICON_PHONE,
    },
    Challenge {
        id: "data-analytics",
        title: "Financial Data Analytics",
        description: "Xây dựng hệ thống phân tích dữ liệu tài chính để dự đoán xu hướng thị trường và đánh giá rủi ro.",
        difficulty: Difficulty::Beginner,
        category: "Data Science",
        technologies: &["Python", "Pandas", "Machine Learning", "Data Visualization"],
        prize: "200,000,000 VNĐ",
        icon: icons::ICON_CHART,
    },
    Challenge {
        id: "open-innovation",
        title: "Open Innovation Track",
        description: "Thử thách mở cho các ý tưởng sáng tạo không giới hạn trong lĩnh vực công nghệ tài chính.",
        difficulty: Difficulty::Beginner,
        category: "Open Track",
        technologies: &["Any Technology", "Creative Solutions", "Innovation"],
        prize: "150,000,000 VNĐ",
        icon: icons::ICON_LIGHTNING,
    },
];

pub const CHALLENGE_RULES: &[&str] = &[
    "Mỗi đội có thể chọn tối đa 2 thử thách",
    "Sản phẩm phải được phát triển trong 48 giờ",
    "Mã nguồn phải được public trên GitHub",
    "Demo sản phẩm trong 5 phút trước ban giám khảo",
];

pub const TOTAL_PRIZE: &str = "1+ tỷ VNĐ";

// ========================
// Timeline
// ========================

pub const TIMELINE_EVENTS: &[TimelineEvent] = &[
    TimelineEvent {
        date: "15/01/2025",
        time: "00:00",
        title: "Mở đăng ký",
        description: "Bắt đầu nhận đăng ký tham gia từ các đội thi",
        category: EventCategory::Registration,
    },
    TimelineEvent {
        date: "28/02/2025",
        time: "23:59",
        title: "Hạn chót đăng ký",
        description: "Kết thúc thời gian đăng ký tham gia",
        category: EventCategory::Deadline,
    },
    TimelineEvent {
        date: "05/03/2025",
        time: "18:00",
        title: "Công bố đội thi",
        description: "Thông báo danh sách các đội được chọn tham gia",
        category: EventCategory::Announcement,
    },
    TimelineEvent {
        date: "15/03/2025",
        time: "08:00",
        title: "Khai mạc Hackathon",
        description: "Lễ khai mạc và giới thiệu thử thách",
        category: EventCategory::Event,
    },
    TimelineEvent {
        date: "15/03/2025",
        time: "10:00",
        title: "Bắt đầu coding",
        description: "Chính thức bắt đầu 48 giờ lập trình",
        category: EventCategory::Event,
    },
    TimelineEvent {
        date: "17/03/2025",
        time: "10:00",
        title: "Nộp sản phẩm",
        description: "Hạn chót nộp sản phẩm và demo",
        category: EventCategory::Deadline,
    },
    TimelineEvent {
        date: "17/03/2025",
        time: "14:00",
        title: "Thuyết trình",
        description: "Các đội thuyết trình sản phẩm trước ban giám khảo",
        category: EventCategory::Event,
    },
    TimelineEvent {
        date: "17/03/2025",
        time: "18:00",
        title: "Trao giải",
        description: "Lễ trao giải và bế mạc sự kiện",
        category: EventCategory::Announcement,
    },
];

// ========================
// Footer
// ========================

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Tuyển dụng VPBank",
        url: "https://facebook.com/vpbank",
        icon: SocialIcon::Facebook,
    },
    SocialLink {
        label: "VPBank",
        url: "https://linkedin.com/company/vpbank",
        icon: SocialIcon::Linkedin,
    },
    SocialLink {
        label: "tuyendung@vpbank.com.vn",
        url: "mailto:tuyendung@vpbank.com.vn",
        icon: SocialIcon::Email,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_list_keys_are_unique() {
        let ids: HashSet<_> = CHALLENGES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CHALLENGES.len());

        let urls: HashSet<_> = SOCIAL_LINKS.iter().map(|l| l.url).collect();
        assert_eq!(urls.len(), SOCIAL_LINKS.len());

        let hrefs: HashSet<_> = NAV_ITEMS.iter().map(|n| n.href).collect();
        assert_eq!(hrefs.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_timeline_dates_are_well_formed() {
        for event in TIMELINE_EVENTS {
            assert!(
                chrono::NaiveDate::parse_from_str(event.date, "%d/%m/%Y").is_ok(),
                "bad date {}",
                event.date
            );
            assert!(
                chrono::NaiveTime::parse_from_str(event.time, "%H:%M").is_ok(),
                "bad time {}",
                event.time
            );
        }
    }

    #[test]
    fn test_every_challenge_has_tags() {
        assert_eq!(CHALLENGES.len(), 6);
        assert!(CHALLENGES.iter().all(|c| !c.technologies.is_empty()));
    }
}
