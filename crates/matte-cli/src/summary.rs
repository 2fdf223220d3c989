use std::path::Path;

use console::Style;
use matte_core::labeling::LabelMap;
use matte_core::pipeline::config::IsolationConfig;

/// Rows of the component table printed before it is cut off.
const MAX_LISTED_COMPONENTS: usize = 12;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_isolation_summary(
    input: &Path,
    output: &Path,
    (height, width): (usize, usize),
    config: &IsolationConfig,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Matte"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(5)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{width}x{height}"))
    );
    println!();

    println!("  {}", s.header.apply_to("Mask"));
    println!("    {:<16}{}", s.label.apply_to("Source"), s.method.apply_to(config.mask_source));
    println!("    {:<16}{}", s.label.apply_to("Threshold"), s.value.apply_to(config.threshold));
    println!();

    println!("  {}", s.header.apply_to("Islands"));
    println!(
        "    {:<16}{}",
        s.label.apply_to("Erosion radius"),
        s.value.apply_to(config.island_erosion_radius)
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Cleanup radius"),
        s.value.apply_to(config.cleanup_erosion_radius)
    );
    println!("    {:<16}{}", s.label.apply_to("Labeling"), s.method.apply_to(config.labeling));
    println!();
}

pub fn print_components(labels: &LabelMap) {
    let s = Styles::new();
    let stats = labels.component_stats();

    println!();
    println!(
        "  {} {}",
        s.header.apply_to("Components"),
        s.value.apply_to(labels.count)
    );
    for comp in stats.iter().take(MAX_LISTED_COMPONENTS) {
        let (min_row, max_row, min_col, max_col) = comp.bbox;
        println!(
            "    {:<6}{:>10} px   rows {}..={}  cols {}..={}",
            s.method.apply_to(format!("#{}", comp.label)),
            comp.area,
            min_row,
            max_row,
            min_col,
            max_col
        );
    }
    if stats.len() > MAX_LISTED_COMPONENTS {
        println!(
            "    {}",
            s.label.apply_to(format!("... {} more", stats.len() - MAX_LISTED_COMPONENTS))
        );
    }
    println!();
}
