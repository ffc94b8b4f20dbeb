//! Static portfolio content rendered by the page sections.
//!
//! Everything here is compiled in; the page performs no I/O to produce
//! its text.

pub struct Profile {
    pub name: &'static str,
    pub badge: &'static str,
    /// Title revealed character by character in the hero banner.
    pub hero_title: &'static str,
    /// Appended once the typewriter completes.
    pub hero_tail: &'static str,
    pub summary: &'static str,
    pub bio: &'static [&'static str],
    pub location: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub skills: &'static [SkillGroup],
    pub timeline: &'static [TimelineEntry],
    pub projects_intro: &'static str,
    pub projects: &'static [Project],
    pub certifications_intro: &'static str,
    pub certifications: &'static [Certification],
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct TimelineEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub certificate: Option<&'static str>,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub repo: &'static str,
}

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Darshan Gowda",
    badge: "Full-Stack Developer",
    hero_title: "Hey, I'm Darshan Gowda",
    hero_tail: "!",
    summary: "I am a software developer and data analytics student with strong skills in the \
MERN stack, building full-stack web apps that solve real problems. My experience includes \
developing scalable systems and interactive platforms. I also have foundational knowledge in \
DevOps and cloud computing, helping deploy and manage applications efficiently. I enjoy \
working in teams and continuously learning to keep up with evolving technologies.",
    bio: &[
        "I'm a full-stack developer currently pursuing my MSc in Data Analytics at Christ \
University, Bengaluru. I completed my BCA from St. Joseph's University and have hands-on \
experience from my internship at WspacesAI Labs, where I built web applications using Vite, \
TypeScript, and PHP that improved system efficiency by 30%.",
        "I work primarily with the MERN stack and have built production-ready projects like a \
Petrol Bunk Management System and EduWorld platform. I'm comfortable with Python, MySQL, AWS, \
Docker, and Android development. My work focuses on optimizing performance: reducing API \
calls by 60% and cutting report generation time by 65%.",
        "Outside of coding, I've published research on deep learning, hold AWS \
certifications, and help mentor junior students in web development.",
    ],
    location: "Bengaluru, Karnataka, India",
    email: "darshangowdaa223@gmail.com",
    github: "https://github.com/darshan-gowdaa",
    linkedin: "https://www.linkedin.com/in/Darshan-Gowda-G-S",
    skills: &[
        SkillGroup {
            title: "Frontend Development",
            skills: &["React", "JavaScript", "HTML & CSS", "Tailwind CSS", "Bootstrap"],
        },
        SkillGroup {
            title: "Backend Development",
            skills: &["Node.js", "Express.js", "Python", "MongoDB", "MySQL", "PostgreSQL"],
        },
        SkillGroup {
            title: "Tools & Platforms",
            skills: &["Git/GitHub", "AWS", "Power BI", "Docker"],
        },
    ],
    timeline: &[
        TimelineEntry {
            title: "Bachelor of Computer Applications (BCA)",
            organization: "St. Joseph's University, Lalbagh Rd., Bengaluru",
            period: "2022 - 2025",
            description: "Pursuing a degree in Computer Applications. Focused on programming, \
web development, databases, and software development lifecycle.",
            certificate: None,
        },
        TimelineEntry {
            title: "Research Paper Publication",
            organization: "International Conference on Current Trends in Information Technology",
            period: "2024",
            description: "Published research paper on Deep Learning Frontiers at St. Joseph's \
University, Bengaluru. Featured presenter for Facial and Hand Recognition project at the \
university's Open Day, demonstrating applied machine learning concepts.",
            certificate: Some("https://drive.google.com/file/d/1oTx411vg61iMN-utb1gqrU3MsoleKeJc/view"),
        },
        TimelineEntry {
            title: "Software Development Intern",
            organization: "WspacesAI Labs Private Limited (WhiteSpaces.ai), Koramangala, Bengaluru",
            period: "Jan 2025 - May 2025",
            description: "Developed web applications using Vite JavaScript and TypeScript \
(frontend) and PHP (backend), enhancing CRM system efficiency by 30%. Optimized performance \
and user experience, reducing load times by 25% and improving team delivery efficiency by \
20%. Collaborated in an agile team, ensuring 100% on-time project delivery and scalable code \
deployment.",
            certificate: Some("https://drive.google.com/file/d/1zN0Dpgxt9sQVyzFuG2YFxRMBQlzm-60c/view"),
        },
        TimelineEntry {
            title: "MSc in Data Analytics",
            organization: "Christ University, Central Campus, Dairy Circle, Bengaluru",
            period: "2025 - 2027",
            description: "Future enrollment in Master's program focusing on data analysis, \
machine learning, business intelligence, and advanced analytics techniques.",
            certificate: None,
        },
    ],
    projects_intro: "My recent projects that showcase my technical skills and problem-solving \
abilities.",
    projects: &[
        Project {
            title: "Petrol Bunk Management System",
            description: "A MERN-stack web application designed to streamline petrol bunk \
operations with modern technology. It provides a comprehensive solution for managing \
inventory, sales, employees, and generating visual reports, ensuring efficient and \
transparent business processes.",
            tags: &[
                "MERN Stack",
                "JWT",
                "Software Documentation",
                "Responsive Web Design",
                "Data Visualisation",
            ],
            repo: "https://github.com/darshan-gowdaa/petrol-bunk-management-system",
        },
        Project {
            title: "EduWorld-FullStack",
            description: "A comprehensive suite of features for admissions, course management, \
enquiries, and more. It has a chatbot feature for user interaction and a responsive design \
for easy use, plus a dashboard for the admin to manage the website.",
            tags: &["MERN Stack", "Tailwind CSS", "JWT", "Chatbot", "Responsive"],
            repo: "https://github.com/darshan-gowdaa/eduworld-fullstack",
        },
        Project {
            title: "headlinesHub-React",
            description: "A modern, responsive news aggregator built with React and Vite. \
Fetches the latest news articles from various categories using the NewsAPI and displays them \
in a clean, intuitive interface with search, list views, and full-article reading.",
            tags: &["React.js", "API", "Bootstrap", "Infinite Scroll", "Caching"],
            repo: "https://github.com/darshan-gowdaa/headlinesHub-React",
        },
    ],
    certifications_intro: "Professional certifications that validate my expertise in cloud \
computing, cybersecurity, and data analytics.",
    certifications: &[
        Certification {
            title: "AWS Academy Graduate",
            issuer: "AWS Academy",
            description: "Introduction to Cloud & Cloud Foundations with hands-on experience \
with AWS services",
            link: "https://drive.google.com/drive/folders/1VSngU3XZfkpLdXzRRIWZLZrRpWLmHTQ6",
        },
        Certification {
            title: "Cybersecurity & Security Foundation",
            issuer: "Infosys Springboard",
            description: "Certification in cybersecurity awareness, security foundation \
concepts, security risks and key security concepts",
            link: "https://drive.google.com/drive/folders/1i2oZ1cNJpIdKR3BSpGi85pGLvRn5DR2l",
        },
    ],
};
