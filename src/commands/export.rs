use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::reports::{generate_console, generate_csv, generate_json, generate_xlsx};
use crate::views::{CatalogViews, ViewTable};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::{BufWriter, Write};

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory receiving one CSV file per view
    #[arg(long, short = 'o', value_name = "DIR", default_value = "eda-output")]
    pub output_dir: Utf8PathBuf,

    /// Also write every view to an Excel workbook, one worksheet per view
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub excel: Option<Utf8PathBuf>,

    /// Also write every view to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Also print every view to the console
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

/// Compute every view from the catalog and write it out
pub fn export_views<H: Host>(host: &mut H, args: &ExportArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let sets = common.load_sets()?;
    let views = CatalogViews::compute(&sets, &common.config.view_options());
    let tables: Vec<ViewTable> = views.tables().collect();

    let written = write_csv_files(&tables, &args.output_dir)?;
    log::info!("wrote {} view files to '{}'", written.len(), args.output_dir);

    if let Some(filename) = &args.excel {
        let mut file = BufWriter::new(fs::File::create(filename).into_app_err_with(|| format!("creating Excel workbook '{filename}'"))?);
        generate_xlsx(&tables, &mut file)?;
        file.flush()?;
    }

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&tables, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report '{filename}'"))?;
    }

    if args.console {
        let mut console_output = String::new();
        generate_console(&tables, common.use_colors, &mut console_output)?;
        let _ = writeln!(host.output(), "{console_output}");
    }

    let _ = writeln!(host.output(), "All views saved to {}", args.output_dir);
    Ok(())
}

/// Write `<dir>/<file stem>.csv` for every table, replacing existing files.
fn write_csv_files(tables: &[ViewTable], dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    fs::create_dir_all(dir).into_app_err_with(|| format!("creating output directory '{dir}'"))?;

    tables
        .iter()
        .map(|table| {
            let path = dir.join(format!("{}.csv", table.kind.file_stem()));
            let file = fs::File::create(&path).into_app_err_with(|| format!("creating '{path}'"))?;
            generate_csv(table, BufWriter::new(file))?;
            log::debug!("saved {path}");
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecordSets;
    use crate::views::ViewOptions;

    #[test]
    fn test_write_csv_files_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let out = Utf8PathBuf::from(dir.path().to_string_lossy().to_string()).join("nested").join("views");
        let tables: Vec<_> = CatalogViews::compute(&RecordSets::default(), &ViewOptions::default()).tables().collect();

        let first = write_csv_files(&tables, &out).unwrap();
        let second = write_csv_files(&tables, &out).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 11);
        assert_eq!(fs::read_dir(&out).unwrap().count(), 11);
        assert_eq!(fs::read_to_string(out.join("02_titles_per_year.csv")).unwrap(), "year_added,count\n");
    }
}
