use crate::models::{PortfolioData, PortfolioSnapshot, SkillCategory};
use colored::*;

const TOP_PROJECTS: usize = 6;

pub fn print_analysis_summary(snapshot: &PortfolioSnapshot) {
    let user = &snapshot.user;

    println!("\n{}", "📈 ANALYSIS COMPLETE".bold().green());
    println!("{}", "=".repeat(50).dimmed());
    println!(
        "👤 User: {} ({})",
        user.name.as_deref().unwrap_or(&user.login).bold(),
        user.login
    );
    println!("📊 Repositories analyzed: {}", snapshot.repositories.len());
    println!("🛠️  Skills identified: {}", snapshot.skills.total());
    println!("💡 Recommendations: {}", snapshot.recommendations.len());

    if !snapshot.repositories.is_empty() {
        println!("\n{}", "🏆 TOP PROJECTS:".bold());
        for (i, repo) in snapshot.repositories.iter().take(TOP_PROJECTS).enumerate() {
            let stack: Vec<&str> = repo.tech_stack.iter().take(3).map(String::as_str).collect();
            println!(
                "{}. {} ({}) - {}",
                i + 1,
                repo.repository.name.cyan(),
                repo.maturity.level.to_string().yellow(),
                stack.join(", ")
            );
        }
    }

    if !snapshot.skills.is_empty() {
        println!("\n{}", "🛠️  SKILLS BY CATEGORY:".bold());
        for category in SkillCategory::ALL {
            let skills = snapshot.skills.get(category);
            if !skills.is_empty() {
                let names: Vec<&str> = skills.iter().map(String::as_str).collect();
                println!("{}: {}", category.as_str().cyan(), names.join(", "));
            }
        }
    }

    if !snapshot.recommendations.is_empty() {
        println!("\n{}", "💡 RECOMMENDATIONS:".bold());
        for (i, recommendation) in snapshot.recommendations.iter().enumerate() {
            println!("{}. {}", i + 1, recommendation);
        }
    }
}

pub fn print_populate_summary(data: &PortfolioData) {
    println!("✅ Found {} projects", data.projects.len());
    println!("🛠️  Identified {} skills", data.skills.len());
    println!("👤 User: {}", data.personal_info.name.bold());

    let featured: Vec<_> = data
        .projects
        .iter()
        .filter(|p| p.featured)
        .take(TOP_PROJECTS)
        .collect();
    if featured.is_empty() {
        return;
    }

    println!("\n{}", "🏆 Featured Projects:".bold());
    for (i, project) in featured.iter().enumerate() {
        println!("{}. {} ({})", i + 1, project.title.cyan(), project.category);
        let stack: Vec<&str> = project.tech_stack.iter().take(4).map(String::as_str).collect();
        println!("   Tech: {}", stack.join(", "));
        if let Some(achievement) = &project.achievement {
            println!("   🏆 {}", achievement.yellow());
        }
        println!();
    }
}
