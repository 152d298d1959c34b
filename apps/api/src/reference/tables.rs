//! Built-in reference tables. `ReferenceData::default()` is assembled from these.

/// Industry-recognized certifications and their weight.
pub const CERTIFICATIONS: &[(&str, f64)] = &[
    // Cloud
    ("AWS Certified Solutions Architect", 0.95),
    ("AWS Certified Developer", 0.90),
    ("AWS Certified DevOps Engineer", 0.92),
    ("Microsoft Azure Fundamentals", 0.85),
    ("Microsoft Azure Administrator", 0.88),
    ("Google Cloud Professional", 0.90),
    ("AWS Certified Cloud Practitioner", 0.88),
    ("AWS Certified SysOps Administrator", 0.89),
    ("AWS Certified Advanced Networking", 0.87),
    ("Google Associate Cloud Engineer", 0.88),
    ("Google Cloud DevOps Engineer", 0.90),
    ("Microsoft Certified: Azure Solutions Architect Expert", 0.92),
    ("Microsoft Certified: Azure DevOps Engineer Expert", 0.91),
    ("HashiCorp Certified: Vault Associate", 0.84),
    ("Certified Jenkins Engineer", 0.82),
    ("Docker Certified Associate", 0.87),
    ("Red Hat Certified System Administrator (RHCSA)", 0.88),
    ("Red Hat Certified Engineer (RHCE)", 0.90),
    ("Ansible Automation Certification", 0.85),
    // Project management
    ("PMP", 0.95),
    ("PRINCE2", 0.90),
    ("Scrum Master", 0.88),
    ("Agile Certified Practitioner", 0.85),
    ("Certified Scrum Product Owner (CSPO)", 0.85),
    ("SAFe Agilist (SA)", 0.87),
    ("PMI Agile Certified Practitioner (PMI-ACP)", 0.89),
    ("Lean Six Sigma Yellow Belt", 0.82),
    ("Lean Six Sigma Green Belt", 0.87),
    ("Lean Six Sigma Black Belt", 0.90),
    ("Certified Project Director (CPD)", 0.88),
    ("CompTIA Project+", 0.83),
    // Data
    ("Google Data Analytics", 0.92),
    ("IBM Data Science Professional", 0.90),
    ("Microsoft Certified: Data Analyst Associate", 0.88),
    ("Cloudera Certified Associate", 0.85),
    ("SAS Certified Data Scientist", 0.88),
    ("Cloudera Certified Professional Data Scientist", 0.87),
    ("Databricks Certified Data Engineer Associate", 0.88),
    ("Microsoft Certified: Azure Data Scientist Associate", 0.87),
    ("Tableau Desktop Specialist", 0.85),
    ("Power BI Data Analyst Associate", 0.88),
    ("Alteryx Designer Core Certification", 0.82),
    ("Snowflake SnowPro Core Certification", 0.85),
    ("MongoDB Certified Developer Associate", 0.84),
    ("Neo4j Certified Professional", 0.81),
    // IT & security
    ("CompTIA Security+", 0.90),
    ("CISSP", 0.95),
    ("CEH", 0.90),
    ("ITIL Foundation", 0.85),
    ("GIAC Security Essentials (GSEC)", 0.90),
    ("Certified Cloud Security Professional (CCSP)", 0.92),
    ("Certified Information Security Manager (CISM)", 0.91),
    ("Certified in Risk and Information Systems Control (CRISC)", 0.88),
    ("Offensive Security Certified Professional (OSCP)", 0.93),
    ("CompTIA Cybersecurity Analyst (CySA+)", 0.88),
    ("CompTIA PenTest+", 0.87),
    ("Cisco Certified CyberOps Associate", 0.86),
    ("Fortinet NSE 4", 0.85),
    // AI / ML
    ("TensorFlow Developer Certificate", 0.88),
    ("DeepLearning.AI TensorFlow Developer", 0.87),
    ("MIT Professional Certificate in ML & AI", 0.90),
    ("HarvardX Data Science Professional Certificate", 0.88),
    ("AWS Certified Machine Learning – Specialty", 0.91),
    ("IBM AI Engineering Professional Certificate", 0.86),
    ("NVIDIA Deep Learning Institute Certificate", 0.84),
    ("Google Cloud ML Engineer", 0.89),
    ("Introduction to Generative AI from Google", 0.88),
    ("Introduction to Responsible AI from Google", 0.85),
    ("Introduction to Image Generation from Google", 0.82),
    ("Introduction to Large Language Models from Google", 0.86),
    // Networking & infrastructure
    ("Cisco Certified Network Associate (CCNA)", 0.88),
    ("Cisco Certified Network Professional (CCNP)", 0.90),
    ("Cisco Certified Internetwork Expert (CCIE)", 0.93),
    ("Juniper Networks Certified Associate (JNCIA)", 0.84),
    ("VMware Certified Professional (VCP)", 0.87),
    ("Aruba Certified Switching Associate", 0.82),
    ("CompTIA Network+", 0.86),
    ("CompTIA A+", 0.84),
    // Development
    ("Oracle Certified Java Programmer", 0.85),
    ("Microsoft Certified: Azure Developer Associate", 0.88),
    ("Certified Kubernetes Administrator", 0.90),
    ("Terraform Associate", 0.85),
    ("Microsoft Certified: Power Platform Developer Associate", 0.84),
    ("Oracle Application Developer Certification", 0.85),
    ("Salesforce Certified Platform Developer I", 0.87),
    ("Salesforce Certified Platform App Builder", 0.86),
    ("Android Developer Certification by Google", 0.85),
    ("Flutter Developer Certification", 0.83),
    ("Meta Front-End Developer Certificate", 0.86),
    ("Meta Back-End Developer Certificate", 0.86),
    ("JetBrains Certified Kotlin Developer", 0.84),
    ("Rust Programming Certification (Coursera/Udemy)", 0.80),
    // CS50
    ("CS50's Introduction to Computer Science from Harvard University", 0.92),
    ("CS50's Web Programming with Python and JavaScript", 0.90),
    ("CS50's Computer Science for Business Professionals", 0.88),
    ("CS50's Introduction to Artificial Intelligence with Python", 0.91),
    ("CS50's Introduction to Programming with Python", 0.87),
    ("CS50's Computer Science for Lawyers", 0.85),
    ("CS50's Introduction to Programming with Scratch", 0.83),
    ("CS50's Introduction to Cybersecurity", 0.85),
    ("CS50's Introduction to Databases with SQL", 0.86),
    ("CS50's Introduction to Programming with R", 0.84),
    // Google professional certificates and learning paths
    ("Google Data Analytics Certificate", 0.92),
    ("Google IT Support Certificate", 0.88),
    ("Google IT Support Professional Certificate", 0.86),
    ("Google Project Management Certificate", 0.89),
    ("Google UX Design Certificate", 0.89),
    ("Google Digital Marketing & E-commerce", 0.87),
    ("Google Analytics Certification", 0.88),
    ("Google Ads Search Certification", 0.86),
    ("Google Ads Display Certification", 0.84),
    ("Google Ads Video Certification", 0.84),
    ("Google Ads Apps Certification", 0.84),
    ("Google Ads Creative Certification", 0.82),
    ("Google Ads – Measurement Certification", 0.85),
    ("AI-Powered Shopping ads Certification", 0.83),
    ("AI-Powered Performance Ads Certification", 0.83),
    ("Grow Offline Sales Certification", 0.82),
    ("Fundamentals of Digital Marketing", 0.86),
    ("Google Play Store Listing Certificate", 0.82),
    ("Google Sheets – Advanced Topics", 0.81),
    ("Google Sheets", 0.80),
    ("Google Calendar", 0.80),
    ("Gmail from Google", 0.80),
    ("Planetary Scale Earth Observation with Google Earth Engine", 0.84),
    ("Build your first web app with Firebase", 0.84),
    ("Get started with Google Maps Platform", 0.83),
    ("Build apps with Flutter", 0.85),
    ("Introduction to SQL", 0.85),
    ("Get data from the internet", 0.82),
    ("Adapt for different screen sizes", 0.81),
    ("Build Actions for Google Assistant", 0.82),
    ("Kotlin fundamentals", 0.84),
    // University MOOCs
    ("Giving 2.0: Stanford University", 0.84),
    ("ART of the MOOC: Activism and Social Movements: Duke", 0.83),
    ("Global Diplomacy: University of London", 0.84),
    ("Learning to Teach Online: UNSW Sydney", 0.83),
    ("Get Interactive: University of London", 0.82),
    ("Sports Marketing: Northwestern University", 0.84),
    ("Math Prep: University of North Texas", 0.80),
    ("How to Create an Online Course: University of Edinburgh", 0.82),
    ("Finding Your Professional Voice: University of London", 0.81),
    ("A life with ADHD: University of Geneva", 0.81),
    // IT support & administration
    ("Microsoft Certified: Modern Desktop Administrator Associate", 0.84),
    ("Apple Certified Support Professional (ACSP)", 0.82),
    ("CompTIA Server+", 0.83),
    ("ITIL 4 Managing Professional", 0.88),
    ("ServiceNow Certified System Administrator", 0.86),
    ("Zendesk Support Admin Certification", 0.81),
];

/// (category, roles, core skills, market demand, growth potential)
pub const ROLE_CATEGORIES: &[(&str, &[&str], &[&str], f64, f64)] = &[
    (
        "Software Development",
        &[
            "Software Engineer",
            "Full Stack Developer",
            "Backend Developer",
            "Frontend Developer",
        ],
        &["Python", "Java", "JavaScript", "SQL", "Git"],
        0.9,
        0.85,
    ),
    (
        "Data Science",
        &[
            "Data Scientist",
            "Machine Learning Engineer",
            "AI Engineer",
            "Data Analyst",
        ],
        &["Python", "Machine Learning", "SQL", "Statistics", "Data Analysis"],
        0.95,
        0.9,
    ),
    (
        "DevOps",
        &[
            "DevOps Engineer",
            "Site Reliability Engineer",
            "Cloud Engineer",
            "Infrastructure Engineer",
        ],
        &["AWS", "Docker", "Kubernetes", "CI/CD", "Linux"],
        0.88,
        0.82,
    ),
];

pub const HIGH_DEMAND_SKILLS: &[(&str, f64)] = &[
    ("Cloud Computing", 0.95),
    ("AI/ML", 0.92),
    ("DevOps", 0.88),
    ("Data Science", 0.90),
    ("Cybersecurity", 0.89),
];

pub const EMERGING_SKILLS: &[(&str, f64)] = &[
    ("Blockchain", 0.85),
    ("Edge Computing", 0.82),
    ("Quantum Computing", 0.75),
    ("AR/VR", 0.78),
];

/// (industry, [(company, values)], industry default values)
pub const COMPANY_VALUES: &[(&str, &[(&str, &[&str])], &[&str])] = &[
    (
        "Technology",
        &[
            ("Google", &["innovation", "collaboration", "impact", "creativity", "diversity", "inclusion"]),
            ("Microsoft", &["respect", "integrity", "accountability", "growth mindset", "customer-centric"]),
            ("Amazon", &["customer obsession", "ownership", "innovation", "high standards", "frugality"]),
            ("Apple", &["innovation", "simplicity", "quality", "privacy", "accessibility"]),
            ("Facebook/Meta", &["move fast", "be bold", "focus on impact", "build social value", "transparency"]),
            ("Netflix", &["judgment", "communication", "curiosity", "courage", "passion", "selflessness"]),
        ],
        &["innovation", "teamwork", "excellence", "customer focus", "integrity"],
    ),
    (
        "Finance",
        &[
            ("Goldman Sachs", &["client service", "excellence", "integrity", "partnership", "innovation"]),
            ("JPMorgan Chase", &["integrity", "fairness", "respect", "responsibility", "diversity"]),
            ("Morgan Stanley", &["doing the right thing", "giving back", "diversity", "excellence"]),
        ],
        &["integrity", "client focus", "excellence", "ethics", "teamwork"],
    ),
    (
        "Healthcare",
        &[
            ("Johnson & Johnson", &["patients first", "ethics", "innovation", "quality", "community"]),
            ("Pfizer", &["courage", "excellence", "equity", "innovation", "collaboration"]),
        ],
        &["patient care", "innovation", "ethics", "quality", "teamwork"],
    ),
];

pub const DEFAULT_COMPANY_VALUES: &[&str] =
    &["innovation", "teamwork", "integrity", "customer focus", "excellence"];

pub const CULTURAL_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "innovation",
        &[
            "innovative", "creative", "disruptive", "pioneering", "cutting-edge", "breakthrough",
            "inventive", "forward-thinking", "experimental", "novel", "advanced", "revolutionize",
        ],
    ),
    (
        "teamwork",
        &[
            "collaborative", "team player", "cross-functional", "partnership", "cooperation",
            "relationship-building", "synergy", "communication", "supportive", "contribute",
        ],
    ),
    (
        "integrity",
        &[
            "ethical", "honest", "transparent", "accountable", "responsible", "trustworthy",
            "principled", "moral", "fair", "compliance", "ethics",
        ],
    ),
    (
        "customer focus",
        &[
            "customer-centric", "client-focused", "user experience", "customer satisfaction",
            "service-oriented", "customer success", "client relations", "user-centric",
        ],
    ),
    (
        "excellence",
        &[
            "high-quality", "exceptional", "best-in-class", "outstanding", "superior",
            "top-tier", "world-class", "exemplary", "meticulous", "rigorous",
        ],
    ),
    (
        "diversity",
        &[
            "inclusive", "diverse perspectives", "multicultural", "equality", "equity",
            "cultural awareness", "belonging", "representation", "accessibility",
        ],
    ),
    (
        "learning",
        &[
            "continuous learning", "growth mindset", "adaptable", "intellectual curiosity",
            "learning agility", "professional development", "skill development",
        ],
    ),
    (
        "agility",
        &[
            "adaptable", "flexible", "nimble", "pivot", "responsive", "quick", "dynamic",
            "resilient", "evolving", "change-oriented",
        ],
    ),
    (
        "ownership",
        &[
            "accountable", "responsible", "initiative", "self-starter", "proactive",
            "autonomous", "self-directed", "take charge", "leadership",
        ],
    ),
    (
        "impact",
        &[
            "results-driven", "outcome-focused", "impactful", "influential", "effective",
            "transformative", "meaningful", "significant contribution",
        ],
    ),
    (
        "sustainability",
        &[
            "sustainable", "environmental", "eco-friendly", "green initiatives",
            "carbon footprint", "conservation", "renewable", "responsible",
        ],
    ),
    (
        "community",
        &[
            "social impact", "community service", "giving back", "corporate citizenship",
            "philanthropy", "outreach", "volunteering",
        ],
    ),
];

/// (industry, entry roles, mid roles, executive roles). Order matters: it is
/// the order alternative roles are drawn in.
pub const ROLE_PROGRESSIONS: &[(&str, [&str; 3], [&str; 3], [&str; 3])] = &[
    (
        "Software Development",
        ["Software Engineer", "Senior Software Engineer", "Lead Engineer"],
        ["Engineering Manager", "Solutions Architect", "Technical Director"],
        ["CTO", "VP of Engineering", "Chief Architect"],
    ),
    (
        "Data Science",
        ["Data Analyst", "Data Scientist", "Senior Data Scientist"],
        ["Lead Data Scientist", "ML Engineer", "Data Science Manager"],
        ["Chief Data Officer", "Director of Data Science", "AI Research Director"],
    ),
    (
        "Marketing",
        ["Marketing Associate", "Marketing Specialist", "Senior Marketing Specialist"],
        ["Marketing Manager", "Brand Manager", "Marketing Director"],
        ["CMO", "VP of Marketing", "Chief Brand Officer"],
    ),
    (
        "Default",
        ["Specialist", "Senior Specialist", "Team Lead"],
        ["Manager", "Senior Manager", "Director"],
        ["Senior Director", "VP", "C-Suite Executive"],
    ),
];

/// (industry, entry skills, mid skills, executive skills)
pub const INDUSTRY_SKILLS: &[(&str, &[&str], &[&str], &[&str])] = &[
    (
        "Software Development",
        &["Programming", "Data Structures", "Algorithms", "Version Control", "Unit Testing"],
        &["System Design", "Architecture", "Team Leadership", "Code Reviews", "Performance Optimization"],
        &["Technical Strategy", "Team Building", "Business Acumen", "Stakeholder Management"],
    ),
    (
        "Data Science",
        &["Statistics", "Python", "Data Visualization", "SQL", "Machine Learning Basics"],
        &["Advanced ML", "Feature Engineering", "Model Deployment", "Project Management", "Deep Learning"],
        &["AI Strategy", "Business Value Creation", "Cross-functional Leadership", "Research Direction"],
    ),
    (
        "Default",
        &["Communication", "Technical Skills", "Problem Solving", "Time Management"],
        &["Leadership", "Project Management", "Strategic Thinking", "Mentoring"],
        &["Vision Setting", "Organizational Leadership", "Business Strategy", "Change Management"],
    ),
];

/// (skills, suggested resources)
pub const LEARNING_RESOURCES: &[(&[&str], &[&str])] = &[
    (
        &["Python", "Machine Learning", "Statistics", "Programming"],
        &["Coursera Specialization", "Udemy Course", "Technical Book"],
    ),
    (
        &["Leadership", "Management", "Communication"],
        &["Leadership Workshop", "Management Book", "Communication Seminar"],
    ),
];

/// (min, max) annual salary in USD for entry, mid and executive tiers.
pub const SALARY_BANDS: [(f64, f64); 3] = [(60_000.0, 85_000.0), (90_000.0, 130_000.0), (150_000.0, 250_000.0)];
