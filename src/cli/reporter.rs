// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::MeshStats;
use crate::io::StlFormat;
use crate::pricing::RateConfig;
use crate::quote::Quote;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a quote with its cost breakdown
    pub fn report_quote(quote: &Quote, duration: Duration) {
        let p = &quote.pricing;
        let name = quote.file_name.as_deref().unwrap_or("<stdin>");

        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "{} {} {}",
            "Quote:".bold(),
            name.cyan(),
            format!("({}, {} triangles)", quote.format, quote.triangle_count).bright_black()
        );
        println!("{}", "━".repeat(80).bright_black());

        Self::print_row("Volume", &format!("{} cm³", Self::format_amount(p.volume_cm3)));
        Self::print_row("Weight", &format!("{} g", Self::format_grams(p.weight_g)));
        Self::print_row("Print time", &format!("{} h", Self::format_amount(p.time_hours)));
        println!();
        Self::print_row("Material", &Self::format_amount(p.material_cost));
        Self::print_row("Electricity", &Self::format_amount(p.electricity_cost));
        Self::print_row("Labor", &Self::format_amount(p.labor_cost));
        Self::print_row("Subtotal", &Self::format_amount(p.subtotal));
        if quote.rates.markup_percent != 0.0 {
            Self::print_row("Markup", &format!("{}%", quote.rates.markup_percent));
        }
        println!(
            "  {:<14} {}",
            "Total:".bold(),
            Self::format_amount(p.total).green().bold()
        );

        println!(
            "\n  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report mesh statistics
    pub fn report_stats(file: &str, format: StlFormat, stats: &MeshStats) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Mesh:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());

        Self::print_row("Format", &format.to_string());
        Self::print_row("Triangles", &stats.triangle_count.to_string());
        Self::print_row("Volume", &format!("{:.4} cm³", stats.volume_cm3));
        Self::print_row("Surface area", &format!("{:.4} cm²", stats.surface_area_cm2));

        match &stats.bbox {
            Some(bbox) => {
                let size = bbox.size();
                Self::print_row(
                    "Bounding box",
                    &format!("{:.2} × {:.2} × {:.2} mm", size.x, size.y, size.z),
                );
                Self::print_row(
                    "  Min",
                    &format!("({:.2}, {:.2}, {:.2})", bbox.min.x, bbox.min.y, bbox.min.z),
                );
                Self::print_row(
                    "  Max",
                    &format!("({:.2}, {:.2}, {:.2})", bbox.max.x, bbox.max.y, bbox.max.z),
                );
            }
            None => Self::print_row("Bounding box", "empty mesh"),
        }

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report the effective rate table
    pub fn report_rates(rates: &RateConfig) {
        println!("{}", "Effective rates:".bold());
        Self::print_row("Density", &format!("{} g/cm³", rates.filament_density_g_per_cm3));
        Self::print_row("Filament", &format!("{} /kg", rates.filament_cost_per_kg));
        Self::print_row("Print speed", &format!("{} cm³/h", rates.print_speed_cm3_per_hr));
        Self::print_row("Electricity", &format!("{} /h", rates.electricity_cost_per_hr));
        Self::print_row("Labor", &format!("{} /job", rates.labor_cost_per_job));
        Self::print_row("Markup", &format!("{}%", rates.markup_percent));
    }

    /// Report totals for a batch run
    pub fn report_summary(quoted: usize, failed: usize, grand_total: f64) {
        println!("\n{}", "═".repeat(80).bright_black());
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(80).bright_black());
        println!("  {} {}", "Quoted:".bright_black(), quoted.to_string().green());
        println!(
            "  {} {}",
            "Failed:".bright_black(),
            if failed > 0 {
                failed.to_string().red()
            } else {
                failed.to_string().green()
            }
        );
        println!(
            "  {} {}",
            "Grand total:".bright_black(),
            Self::format_amount(grand_total).cyan()
        );
        println!("{}", "═".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    fn print_row(name: &str, value: &str) {
        println!("  {:<14} {}", format!("{}:", name).bright_black(), value);
    }

    /// Money, hours and volumes are shown with two decimals
    fn format_amount(value: f64) -> String {
        format!("{:.2}", value)
    }

    /// Weights are shown with one decimal
    fn format_grams(value: f64) -> String {
        format!("{:.1}", value)
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(
            Reporter::format_duration(Duration::from_micros(500)),
            "500µs"
        );
        assert_eq!(
            Reporter::format_duration(Duration::from_millis(5)),
            "5.00ms"
        );
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }

    #[test]
    fn test_presentation_rounding() {
        assert_eq!(Reporter::format_amount(170.06000000000003), "170.06");
        assert_eq!(Reporter::format_amount(0.992), "0.99");
        assert_eq!(Reporter::format_grams(62.00000000000001), "62.0");
    }
}
