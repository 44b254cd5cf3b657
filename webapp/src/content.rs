// everything the page says about its owner.  the components never hardcode
// profile text; it all comes from here

pub const FIRST_NAME: &str = "Jerin";
pub const LAST_NAME: &str = "Mulangan";
pub const FULL_NAME: &str = "Jerin Mulangan";

pub const PAGE_TITLE: &str = "Jerin Mulangan | Software Engineer";
pub const PAGE_DESCRIPTION: &str =
    "Personal website of Jerin Mulangan, a software engineer specializing in web development.";

pub const TAGLINE: &str = "Software Engineer specializing in building efficient full stack systems and data analysis algorithms";

pub const RESUME_URL: &str = "/resume.pdf";

// shown in the footer
pub const LAST_UPDATED: &str = "2025-06-01";

pub const EMAIL: &str = "jerinmulangan@outlook.com";
pub const GITHUB_URL: &str = "https://github.com/jerinmulangan";
pub const GITHUB_LABEL: &str = "github.com/jerinmulangan";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jerinmulangan/";
pub const LINKEDIN_LABEL: &str = "linkedin.com/in/jerinmulangan";

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

pub const ABOUT: &[&str] = &[
    "I'm a software engineer with a strong full-stack foundation and a growing focus on AI and \
     machine learning. I enjoy building modern web applications that not only scale but also \
     integrate intelligent features to enhance user experience and decision-making.",
    "Over the past 5 years, I've worked on a range of projects, from full-stack systems to \
     interactive data visualizations, where I've applied both engineering best practices and \
     data-driven insights. Recently, my interests have expanded into building and evaluating ML \
     models, integrating them into real-world applications, and exploring how AI can solve \
     practical problems at scale.",
    "When I'm not coding, I spend time producing music and editing videos, creative outlets that \
     challenge me to think in new ways and stay sharp with both technical and artistic tools. I'm \
     always experimenting, whether it's tuning a neural network or a synth patch.",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillGroup {
    pub heading: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        heading: "Frontend",
        skills: &[
            "React",
            "Next.js",
            "TypeScript",
            "Tailwind CSS",
            "JavaScript (ES6+)",
            "HTML5/CSS3",
            "Bootstrap",
            "ESLint",
        ],
    },
    SkillGroup {
        heading: "Backend",
        skills: &[
            "Python",
            "Node.js",
            "Express.js",
            "Java/Springboot",
            "C# ASP.NET",
            "C/C++",
            "Django",
            "PostgreSQL",
            "MySQL",
            "MongoDB",
        ],
    },
    SkillGroup {
        heading: "Tools & Others",
        skills: &[
            "Git", "Docker", "AWS", "CI/CD", "Jest", "JUnit", "Pytest", "Figma",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: &'static str,
    pub demo_url: &'static str,
}

impl Project {
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.to_string()).collect()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Platform",
        description: "A full-stack e-commerce platform with payment integration, user \
                      authentication, and admin dashboard.",
        tags: &["Next.js", "Node.js", "MongoDB", "Stripe"],
        github_url: "https://github.com/johndoe/ecommerce",
        demo_url: "https://ecommerce-demo.com",
    },
    Project {
        title: "Data Visualization Tool",
        description: "An interactive dashboard for visualizing complex datasets with filtering \
                      and export capabilities.",
        tags: &["React", "D3.js", "Express", "PostgreSQL"],
        github_url: "https://github.com/johndoe/data-viz",
        demo_url: "https://data-viz-demo.com",
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates and \
                      team features.",
        tags: &["React", "Firebase", "Tailwind CSS"],
        github_url: "https://github.com/johndoe/task-app",
        demo_url: "https://task-app-demo.com",
    },
    Project {
        title: "Weather Forecast App",
        description: "A weather application that provides accurate forecasts using multiple \
                      weather APIs.",
        tags: &["JavaScript", "OpenWeather API", "Chart.js"],
        github_url: "https://github.com/johndoe/weather-app",
        demo_url: "https://weather-app-demo.com",
    },
    Project {
        title: "Dijkstra Algorithm Visualizer",
        description: "Real-time Dijkstra visualizer in C++/SFML.",
        tags: &["C++", "SFML Framework", "Python"],
        github_url: "https://github.com/jerinmulangan/dir/tree/main/personal_projects/visual_dijkstra",
        demo_url: "https://github.com/jerinmulangan/dir/tree/main/personal_projects/visual_dijkstra",
    },
    Project {
        title: "Portfolio Website",
        description: "This portfolio website showcasing my projects and skills.",
        tags: &["Next.js", "TypeScript", "Framer Motion"],
        github_url: "https://github.com/jerinmulangan/dir/tree/main/personal_projects/personal_website",
        demo_url: "#",
    },
];
