use std::{fmt::Write, time::Duration};

use chrono::NaiveDate;

use crate::content::Profile;

pub const RESUME_FILE_NAME: &str = "Piyush_Bhardwaj_Resume.txt";
/// How long the download button shows its "Preparing..." state.
pub const PREPARE_DELAY: Duration = Duration::from_millis(1000);
pub const DOWNLOADED_MESSAGE: &str = "Resume downloaded successfully!";

/// `writeln!` into a `String`, which cannot fail.
macro_rules! put {
    ($out:expr, $($arg:tt)*) => {
        let _ = writeln!($out, $($arg)*);
    };
}

fn heading(out: &mut String, title: &str) {
    put!(out, "{title}");
    put!(out, "{}", "=".repeat(title.chars().count()));
}

fn bullets<'a>(out: &mut String, items: impl IntoIterator<Item = &'a String>) {
    for item in items {
        put!(out, "• {item}");
    }
}

/// Plain-text resume built from the profile, stamped with `generated_on`.
pub fn render(profile: &Profile, generated_on: NaiveDate) -> String {
    let mut out = String::new();
    put!(out, "{}", profile.name.to_uppercase());
    put!(out, "{}", profile.headline);
    out.push('\n');

    let contact = &profile.contact;
    heading(&mut out, "CONTACT INFORMATION");
    put!(out, "Email: {}", contact.email);
    put!(out, "Phone: {}", contact.phone);
    put!(out, "Location: {}", contact.location);
    put!(out, "LinkedIn: {}", contact.linkedin);
    put!(out, "GitHub: {}", contact.github);
    put!(out, "LeetCode: {}", contact.leetcode);
    out.push('\n');

    heading(&mut out, "EDUCATION");
    for edu in &profile.education {
        put!(out, "{}, {}", edu.institution, edu.location);
        put!(out, "{}", edu.degree);
        put!(out, "{}: {}", edu.period_label, edu.period);
        put!(out, "{}: {}", edu.score_label, edu.score);
        out.push('\n');
    }

    heading(&mut out, "TECHNICAL SKILLS");
    for category in &profile.skills {
        let names: Vec<&str> = category.skills.iter().map(|s| s.name.as_str()).collect();
        put!(out, "{}: {}", category.name, names.join(", "));
    }
    if !profile.competencies.is_empty() {
        put!(out, "Core Competencies: {}", profile.competencies.join(", "));
    }
    out.push('\n');

    heading(&mut out, "PROFESSIONAL EXPERIENCE");
    for job in &profile.experience {
        put!(out, "{} | {}", job.role, job.company);
        put!(out, "{} | {}", job.period, job.location);
        bullets(&mut out, &job.highlights);
        out.push('\n');
    }

    heading(&mut out, "KEY PROJECTS");
    for project in &profile.projects {
        put!(out, "{} | {}", project.name, project.date);
        put!(out, "Technologies: {}", project.technologies.join(", "));
        bullets(&mut out, &project.highlights);
        out.push('\n');
    }

    heading(&mut out, "CERTIFICATIONS & ACHIEVEMENTS");
    put!(out, "Technical Certifications:");
    bullets(&mut out, &profile.certifications);
    out.push('\n');
    put!(out, "Notable Achievements:");
    bullets(&mut out, &profile.achievements);
    out.push('\n');

    for (title, items) in [
        ("AREAS OF EXPERTISE", &profile.expertise),
        ("LANGUAGES", &profile.languages),
        ("INTERESTS", &profile.interests),
    ] {
        heading(&mut out, title);
        bullets(&mut out, items);
        out.push('\n');
    }

    put!(out, "Generated on: {}", generated_on.format("%-m/%-d/%Y"));
    out
}
