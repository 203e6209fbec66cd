// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod input;
mod ui;

use a11y_scan_report::report;
use config::{RenderJob, RenderPlan};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Load inputs and resolve settings
    let plan = match config::build_render_plan(&args) {
        Ok(plan) => plan,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let content = render(&plan);

    if let Err(e) = write_report(&content, plan.output.as_deref()) {
        ui::print_error(&format!("Failed to write report: {}", e));
        std::process::exit(1);
    }
}

/// Render the planned report
fn render(plan: &RenderPlan) -> String {
    let builder = report::content_builder(plan.dialect, plan.artifacts.clone(), plan.settings.clone());

    match &plan.job {
        RenderJob::Error => builder.build_error_content(),
        RenderJob::Scan { scan, title, baseline } => builder.build_content(scan, title.as_deref(), baseline.as_ref()),
    }
}

/// Write the report to a file, or to stdout followed by a newline
fn write_report(content: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            ui::status(&format!("Report saved to: {}", path.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            writeln!(stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
