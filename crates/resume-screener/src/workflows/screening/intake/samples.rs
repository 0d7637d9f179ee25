use super::super::domain::Candidate;

/// Job description used by the demo command and the sample-pool API option.
pub const SAMPLE_JOB_DESCRIPTION: &str = "Senior Full Stack Developer

Requirements:
- 5+ years experience in web development
- Strong proficiency in JavaScript, React, Node.js
- Experience with Python and FastAPI
- Knowledge of PostgreSQL and MongoDB
- Cloud platform experience (AWS or GCP)
- CI/CD pipeline setup experience
- Good communication skills
- Bachelor's degree in Computer Science or related field

Nice to have:
- Experience with Docker and Kubernetes
- TypeScript knowledge
- Leadership experience";

pub const SAMPLE_POSITION: &str = "Senior Full Stack Developer";

const SAMPLES: [(&str, &str, &str); 5] = [
    (
        "Alex Johnson",
        "alex.johnson@email.com",
        "Full Stack Developer with 6 years of experience. Expert in React, Node.js, and Python.
Strong background in AWS cloud services. Built multiple SaaS applications from scratch.
Proficient in PostgreSQL, MongoDB, Docker. BS in Computer Science from MIT.
Led team of 4 developers. Implemented CI/CD pipelines using Jenkins.",
    ),
    (
        "Sarah Chen",
        "sarah.chen@email.com",
        "Software Engineer with 3 years experience. Skilled in JavaScript, React, and Node.js.
Some experience with Python. Working knowledge of AWS. Completed several web projects.
Bachelor's in Software Engineering. Good team player and fast learner.",
    ),
    (
        "Michael Rodriguez",
        "m.rodriguez@email.com",
        "Senior Developer with 8 years experience. Deep expertise in JavaScript, TypeScript, React, Node.js.
Python and FastAPI for microservices. PostgreSQL and Redis expert.
AWS and GCP certified. Kubernetes and Docker in production. Led multiple teams.
MS in Computer Science. Open source contributor.",
    ),
    (
        "Emily Watson",
        "emily.w@email.com",
        "Front-end Developer with 4 years experience. Strong React and JavaScript skills.
Basic Node.js knowledge. Worked with REST APIs. Some MongoDB experience.
Good at UI/UX design. Bachelor's in Design. Team collaboration skills.",
    ),
    (
        "David Kim",
        "d.kim@email.com",
        "Full Stack Engineer with 7 years experience. JavaScript, TypeScript, React expert.
Node.js and Python backend development. FastAPI and Express. PostgreSQL and MongoDB.
AWS infrastructure and Lambda. Docker containers. CI/CD with GitHub Actions.
Bachelor's CS. Mentored junior developers.",
    ),
];

/// Built-in pool for demos and smoke tests.
pub fn sample_candidates() -> Vec<Candidate> {
    SAMPLES
        .iter()
        .map(|(name, email, resume)| Candidate::new(*name, *email, *resume))
        .collect()
}
