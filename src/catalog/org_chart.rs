//! Authored organizational chart data.
//!
//! Names are matched exactly by the catalog, so keep the casing here as the
//! canonical spelling.

/// Executive -> direct reports.
pub(super) const HIERARCHY: &[(&str, &[&str])] = &[
    ("CEO", &["CTO", "COO", "CMO"]),
    (
        "CTO",
        &[
            "Frontend Developer",
            "Backend Developer",
            "Full Stack Developer",
            "UI/UX Designer",
            "Mobile Developer",
            "Game Developer",
            "API Developer",
            "Database Administrator (DBA)",
            "Data Engineer",
            "AI/ML Engineer",
            "DevOps Engineer",
            "Cloud Engineer",
            "System Administrator",
            "Site Reliability Engineer (SRE)",
            "QA Tester",
            "QA Automation Engineer",
            "Performance Tester",
            "Security Tester",
            "Ethical Hacker",
            "Product Manager",
            "Graphic Designer",
            "Web Designer",
            "Data Scientist",
            "Data Analyst",
            "AI Engineer",
        ],
    ),
    ("COO", &["HR Manager", "Recruiter", "Office Admin"]),
    (
        "CMO",
        &[
            "Marketing - Digital Marketer",
            "Marketing - SEO Specialist",
            "Marketing - Social Media Manager",
            "Sales - Sales Executive",
            "Sales - Account Manager",
            "Sales - Business Analyst",
        ],
    ),
];

/// Department -> members. Overlaps with the hierarchy.
pub(super) const DEPARTMENTS: &[(&str, &[&str])] = &[
    (
        "Marketing",
        &[
            "Marketing - Digital Marketer",
            "Marketing - SEO Specialist",
            "Marketing - Social Media Manager",
        ],
    ),
    (
        "Sales",
        &[
            "Sales - Sales Executive",
            "Sales - Account Manager",
            "Sales - Business Analyst",
        ],
    ),
    ("HR", &["HR Manager", "Recruiter", "Office Admin"]),
    (
        "Engineering",
        &[
            "Frontend Developer",
            "Backend Developer",
            "Full Stack Developer",
            "UI/UX Designer",
            "Mobile Developer",
            "Game Developer",
            "API Developer",
            "Database Administrator (DBA)",
            "Data Engineer",
            "AI/ML Engineer",
            "DevOps Engineer",
            "Cloud Engineer",
            "System Administrator",
            "Site Reliability Engineer (SRE)",
            "QA Tester",
            "QA Automation Engineer",
            "Performance Tester",
            "Security Tester",
            "Ethical Hacker",
        ],
    ),
    (
        "ProductDesign",
        &[
            "Product Manager",
            "UI/UX Designer",
            "Graphic Designer",
            "Web Designer",
        ],
    ),
    (
        "DataAI",
        &[
            "Data Scientist",
            "Data Analyst",
            "AI Engineer",
            "AI/ML Engineer",
            "Data Engineer",
        ],
    ),
    (
        "ITSupport",
        &[
            "IT Helpdesk",
            "Technical Support Engineer",
            "Network Engineer",
            "Database Administrator (DBA)",
        ],
    ),
];
