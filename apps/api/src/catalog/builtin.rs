//! Built-in major table. Interest strings must match `QUESTIONS` options exactly;
//! `Catalog` tests enforce it.

use crate::models::major::{Career, JobMarket, Major};
use crate::quiz::vocabulary::{Category, EducationLevel, GoalTag};

// Interest question options, named for readability below.
const TECHNICAL: &str = "Technical and logical problems";
const STRATEGIC: &str = "Business and strategic challenges";
const HELPING: &str = "Problems that involve helping people";
const ARTISTIC: &str = "Creative and artistic projects";

const WITH_COMPUTERS: &str = "Independently with computers/technology";
const LEADING_TEAMS: &str = "In teams leading projects";
const ONE_ON_ONE: &str = "One-on-one with people";
const COLLABORATIVE: &str = "In creative collaborative environments";

const MATH_SCIENCE: &str = "Math and Science";
const ECONOMICS: &str = "Business and Economics";
const SOCIAL_SCIENCES: &str = "Social Sciences";
const HUMANITIES: &str = "Arts and Humanities";

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    level: EducationLevel,
    interests: &'static [&'static str],
    goals: &'static [GoalTag],
    careers: &'static [(&'static str, u32)],
    growth_rate: f32,
    outlook: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "cs",
        name: "Computer Science",
        description: "Software, algorithms and the theory of computation.",
        category: Category::Tech,
        level: EducationLevel::FourYear,
        interests: &[TECHNICAL, WITH_COMPUTERS, MATH_SCIENCE],
        goals: &[GoalTag::HighIncome, GoalTag::StartBusiness],
        careers: &[("Software Engineer", 132_000), ("Systems Analyst", 103_000)],
        growth_rate: 17.0,
        outlook: "Much faster than average",
    },
    Entry {
        id: "it",
        name: "Information Technology",
        description: "Networks, support and day-to-day operation of computer systems.",
        category: Category::Tech,
        level: EducationLevel::TwoYear,
        interests: &[TECHNICAL, WITH_COMPUTERS],
        goals: &[GoalTag::HighIncome],
        careers: &[("Network Technician", 68_000), ("Help Desk Specialist", 59_000)],
        growth_rate: 6.0,
        outlook: "As fast as average",
    },
    Entry {
        id: "engineering",
        name: "Engineering",
        description: "Design and analysis of physical systems and structures.",
        category: Category::Tech,
        level: EducationLevel::FourYear,
        interests: &[TECHNICAL, MATH_SCIENCE],
        goals: &[GoalTag::HighIncome],
        careers: &[("Mechanical Engineer", 99_000), ("Civil Engineer", 95_000)],
        growth_rate: 8.0,
        outlook: "Faster than average",
    },
    Entry {
        id: "data-science",
        name: "Data Science",
        description: "Statistics and machine learning applied to large datasets.",
        category: Category::Tech,
        level: EducationLevel::Masters,
        interests: &[TECHNICAL, WITH_COMPUTERS, MATH_SCIENCE],
        goals: &[GoalTag::HighIncome],
        careers: &[("Data Scientist", 108_000), ("Machine Learning Engineer", 140_000)],
        growth_rate: 35.0,
        outlook: "Much faster than average",
    },
    Entry {
        id: "business",
        name: "Business Administration",
        description: "Management, marketing and operations of organizations.",
        category: Category::Business,
        level: EducationLevel::FourYear,
        interests: &[STRATEGIC, LEADING_TEAMS, ECONOMICS],
        goals: &[GoalTag::HighIncome, GoalTag::StartBusiness],
        careers: &[("Operations Manager", 101_000), ("Marketing Manager", 140_000)],
        growth_rate: 7.0,
        outlook: "As fast as average",
    },
    Entry {
        id: "accounting",
        name: "Accounting",
        description: "Bookkeeping, auditing and financial reporting.",
        category: Category::Business,
        level: EducationLevel::TwoYear,
        interests: &[STRATEGIC, ECONOMICS, MATH_SCIENCE],
        goals: &[GoalTag::HighIncome],
        careers: &[("Bookkeeper", 47_000), ("Payroll Specialist", 52_000)],
        growth_rate: 4.0,
        outlook: "As fast as average",
    },
    Entry {
        id: "mba",
        name: "Master of Business Administration",
        description: "Advanced leadership, finance and strategy.",
        category: Category::Business,
        level: EducationLevel::Masters,
        interests: &[STRATEGIC, LEADING_TEAMS, ECONOMICS],
        goals: &[GoalTag::HighIncome, GoalTag::StartBusiness],
        careers: &[("Management Consultant", 95_000), ("Chief Executive", 189_000)],
        growth_rate: 6.0,
        outlook: "As fast as average",
    },
    Entry {
        id: "nursing",
        name: "Nursing (ADN)",
        description: "Clinical patient care leading to RN licensure.",
        category: Category::Social,
        level: EducationLevel::TwoYear,
        interests: &[HELPING, ONE_ON_ONE, MATH_SCIENCE],
        goals: &[GoalTag::HelpOthers, GoalTag::HighIncome],
        careers: &[("Registered Nurse", 81_000)],
        growth_rate: 6.0,
        outlook: "Faster than average",
    },
    Entry {
        id: "psychology",
        name: "Psychology",
        description: "Human behavior, cognition and mental health.",
        category: Category::Social,
        level: EducationLevel::FourYear,
        interests: &[HELPING, ONE_ON_ONE, SOCIAL_SCIENCES],
        goals: &[GoalTag::HelpOthers],
        careers: &[("Case Manager", 48_000), ("Research Assistant", 50_000)],
        growth_rate: 6.0,
        outlook: "As fast as average",
    },
    Entry {
        id: "education",
        name: "Education",
        description: "Teaching methods and classroom leadership.",
        category: Category::Social,
        level: EducationLevel::FourYear,
        interests: &[HELPING, LEADING_TEAMS, SOCIAL_SCIENCES],
        goals: &[GoalTag::HelpOthers],
        careers: &[("Elementary School Teacher", 61_000), ("Instructional Coordinator", 66_000)],
        growth_rate: 1.0,
        outlook: "Slower than average",
    },
    Entry {
        id: "social-work",
        name: "Social Work (MSW)",
        description: "Clinical and community practice supporting individuals and families.",
        category: Category::Social,
        level: EducationLevel::Masters,
        interests: &[HELPING, ONE_ON_ONE, SOCIAL_SCIENCES],
        goals: &[GoalTag::HelpOthers],
        careers: &[("Clinical Social Worker", 58_000)],
        growth_rate: 7.0,
        outlook: "Faster than average",
    },
    Entry {
        id: "design",
        name: "Graphic Design",
        description: "Visual communication for print, brand and digital products.",
        category: Category::Creative,
        level: EducationLevel::FourYear,
        interests: &[ARTISTIC, COLLABORATIVE, HUMANITIES],
        goals: &[GoalTag::BeCreative, GoalTag::StartBusiness],
        careers: &[("Graphic Designer", 58_000), ("UX Designer", 93_000)],
        growth_rate: 3.0,
        outlook: "As fast as average",
    },
    Entry {
        id: "multimedia",
        name: "Multimedia Arts",
        description: "Animation, video and interactive media production.",
        category: Category::Creative,
        level: EducationLevel::TwoYear,
        interests: &[ARTISTIC, COLLABORATIVE, WITH_COMPUTERS],
        goals: &[GoalTag::BeCreative],
        careers: &[("Video Editor", 66_000), ("Animator", 99_000)],
        growth_rate: 4.0,
        outlook: "As fast as average",
    },
    Entry {
        id: "architecture",
        name: "Architecture (M.Arch)",
        description: "Design of buildings and spaces, leading to licensure.",
        category: Category::Creative,
        level: EducationLevel::Masters,
        interests: &[ARTISTIC, MATH_SCIENCE, HUMANITIES],
        goals: &[GoalTag::BeCreative, GoalTag::HighIncome],
        careers: &[("Architect", 93_000)],
        growth_rate: 5.0,
        outlook: "As fast as average",
    },
];

pub fn majors() -> Vec<Major> {
    ENTRIES.iter().map(to_major).collect()
}

fn to_major(entry: &Entry) -> Major {
    Major {
        id: entry.id.to_string(),
        name: entry.name.to_string(),
        description: entry.description.to_string(),
        category: entry.category,
        education_level: entry.level,
        interests: entry.interests.iter().map(|s| s.to_string()).collect(),
        goals: entry.goals.to_vec(),
        careers: entry
            .careers
            .iter()
            .map(|(title, salary)| Career {
                title: title.to_string(),
                median_salary: Some(*salary),
            })
            .collect(),
        job_market: JobMarket {
            growth_rate: Some(entry.growth_rate),
            outlook: Some(entry.outlook.to_string()),
        },
    }
}
