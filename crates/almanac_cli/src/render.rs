//! Plain-text rendering of the site block and the day report.

use almanac_config::SiteConfig;
use almanac_summary::DayReport;

/// `10.2306° N` / `77.4686° E` style coordinate.
fn coordinate(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    format!("{:.4}° {hemisphere}", value.abs())
}

pub fn format_site(site: &SiteConfig) -> String {
    format!(
        "Location:  {}\nLatitude:  {}    Longitude: {}\nAltitude:  {:.0} m\n",
        site.name,
        coordinate(site.latitude_deg, 'N', 'S'),
        coordinate(site.longitude_deg, 'E', 'W'),
        site.altitude_m,
    )
}

/// One indented `label  value` line of the day report.
fn field(label: &str, value: &str) -> String {
    format!("  {label:<22}{value}\n")
}

pub fn format_planet_table(report: &DayReport) -> String {
    let [rise, set, zenith] = report.planet_column_headers();
    let mut out = format!("{:<10}{rise:<12}{set:<12}{zenith}\n", "Planet");
    for row in &report.planets {
        let (r, s, z) = row.timing.as_tuple();
        out.push_str(&format!("{:<10}{r:<12}{s:<12}{z}\n", row.body.name()));
    }
    out
}

pub fn format_day_report(report: &DayReport) -> String {
    let mut out = format!(
        "Astronomy Data for {}\n\n",
        report.date.format("%A, %d %B %Y")
    );

    out.push_str("Sun\n");
    out.push_str(&field("Sunrise:", &report.sun.sunrise));
    out.push_str(&field("Solar Noon (Zenith):", &report.sun.solar_noon));
    out.push_str(&field("Sunset:", &report.sun.sunset));

    out.push_str("\nMoon\n");
    out.push_str(&field("Illumination:", &report.moon.illumination_text()));
    out.push_str(&field("Moonrise:", &report.moon.timing.rise));
    out.push_str(&field("Moonset:", &report.moon.timing.set));
    out.push_str(&field("Moon Zenith:", &report.moon.timing.transit));

    out.push_str("\nPlanetary Rise/Set & Zenith Times\n");
    out.push_str(&format_planet_table(report));
    out
}
