use hexsweep_engine::ReportPaths;

pub fn summary_line(unique: usize, paths: &ReportPaths) -> String {
    format!(
        "Found {} unique hex codes. Results: {}, {}",
        unique,
        paths.json.display(),
        paths.csv.display()
    )
}

pub fn print_summary(unique: usize, paths: &ReportPaths) {
    println!("{}", summary_line(unique, paths));
}
