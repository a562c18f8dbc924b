//! Domains command implementation.
//!
//! Lists recognized technology domains with their bonus, optionally
//! filtered by an autocomplete prefix, followed by the skill level bonuses.

use anyhow::Result;
use startrit_lib::prelude::*;

use crate::config::Config;

/// List recognized domains matching an optional prefix.
pub(crate) fn list_domains(search: Option<&str>, config: &Config) -> Result<()> {
    let estimator = config.estimator()?;
    let card = estimator.card();
    let domains = Domain::suggest(search.unwrap_or_default());

    if domains.is_empty() {
        println!("No recognized domains found.");
        println!(
            "Unrecognized domains earn the {} bonus ({}{}).",
            Domain::Other,
            config.currency,
            card.domain_bonus(Domain::Other)
        );
        return Ok(());
    }

    println!("{:<15} {:>10}", "DOMAIN", "BONUS");
    println!("{}", "-".repeat(26));

    for domain in &domains {
        println!(
            "{:<15} {:>10}",
            domain.as_str(),
            format!("+{}{}", config.currency, card.domain_bonus(*domain))
        );
    }

    println!("\nTotal: {} domains", domains.len());
    print_skill_bonuses(card, &config.currency);
    Ok(())
}

/// Print the bonus for every skill level.
fn print_skill_bonuses(card: &RateCard, currency: &str) {
    println!("\n{:<15} {:>10}", "SKILL", "BONUS");
    println!("{}", "-".repeat(26));

    for skill in SkillLevel::all() {
        println!(
            "{:<15} {:>10}",
            skill.as_str(),
            format!("+{}{}", currency, card.skill_bonus(Some(*skill)))
        );
    }
}
