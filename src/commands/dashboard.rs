use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::catalog::{SnapshotCell, TitleKind};
use crate::dashboard::{Dashboard, SESSION_HELP, SessionCommand, parse_region, parse_selection, parse_year_range};
use crate::reports::{write_controls, write_overview, write_sample, write_view};
use clap::Parser;
use ohno::IntoAppError;
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Initial year range, such as `2015-2020`
    #[arg(long, value_name = "LO-HI")]
    pub years: Option<String>,

    /// Initial content types, comma separated (`all` for every type)
    #[arg(long, value_name = "TYPES")]
    pub types: Option<String>,

    /// Initial regions, comma separated (`all` for every region)
    #[arg(long, value_name = "REGIONS")]
    pub regions: Option<String>,

    /// Render the initial dashboard and exit without reading commands
    #[arg(long)]
    pub once: bool,
}

/// Run an interactive dashboard session over the host's input and output
pub fn run_dashboard<H: Host>(host: &mut H, args: &DashboardArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let snapshot = SnapshotCell::new();
    let sets = snapshot.get_or_load(|| common.load_sets())?;
    let mut dashboard = Dashboard::new(sets, common.config.view_options());

    if let Some(years) = &args.years {
        let _ = dashboard.set_years(parse_year_range(years)?)?;
    }
    if let Some(types) = &args.types {
        let selection = parse_selection(types, |name| Ok(TitleKind::from(name)))?;
        dashboard.set_kinds(selection.resolve(&dashboard.options().kinds))?;
    }
    if let Some(regions) = &args.regions {
        let selection = parse_selection(regions, parse_region)?;
        dashboard.set_regions(selection.resolve(&dashboard.options().regions))?;
    }

    let mut session = Session {
        host,
        dashboard,
        use_colors: common.use_colors,
        sample_rows: common.config.sample_rows,
    };

    session.execute(SessionCommand::Controls)?;
    session.execute(SessionCommand::Show)?;

    if args.once {
        return Ok(());
    }

    let _ = writeln!(session.host.output(), "\nType `help` for a list of commands.");
    session.run()
}

struct Session<'a, 'b, H: Host> {
    host: &'a mut H,
    dashboard: Dashboard<'b>,
    use_colors: bool,
    sample_rows: usize,
}

impl<H: Host> Session<'_, '_, H> {
    /// Read and execute commands until `quit` or the end of input.
    fn run(&mut self) -> Result<()> {
        loop {
            let _ = write!(self.host.output(), "> ");
            let _ = self.host.output().flush();

            let mut line = String::new();
            let read = self.host.input().read_line(&mut line).into_app_err("reading dashboard command")?;
            if read == 0 {
                let _ = writeln!(self.host.output());
                return Ok(());
            }

            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<SessionCommand>() {
                Ok(SessionCommand::Quit) => return Ok(()),
                Ok(command) => {
                    if let Err(e) = self.execute(command) {
                        let _ = writeln!(self.host.error(), "error: {e}");
                    }
                }
                Err(e) => {
                    let _ = writeln!(self.host.error(), "error: {e}");
                }
            }
        }
    }

    fn execute(&mut self, command: SessionCommand) -> Result<()> {
        let mut text = String::new();

        match command {
            SessionCommand::Help => text.push_str(SESSION_HELP),
            SessionCommand::Controls => write_controls(self.dashboard.controls(), self.dashboard.options(), self.use_colors, &mut text)?,
            SessionCommand::Summary => write_overview(&self.dashboard.current().overview, self.use_colors, &mut text)?,
            SessionCommand::Sample(rows) => {
                let current = self.dashboard.current();
                write_sample(current.sample(rows.unwrap_or(self.sample_rows)), self.use_colors, &mut text)?;
            }
            SessionCommand::Show => {
                let current = self.dashboard.current();
                write_overview(&current.overview, self.use_colors, &mut text)?;
                for table in current.views.tables() {
                    text.push('\n');
                    write_view(&table, self.use_colors, &mut text)?;
                }
            }
            SessionCommand::View(kind) => write_view(&self.dashboard.current().views.table(kind), self.use_colors, &mut text)?,
            SessionCommand::Years(years) => {
                let applied = self.dashboard.set_years(years)?;
                text.push_str(&format!("Years set to {}-{}\n", applied.start(), applied.end()));
                write_overview(&self.dashboard.current().overview, self.use_colors, &mut text)?;
            }
            SessionCommand::Types(selection) => {
                let kinds = selection.resolve(&self.dashboard.options().kinds);
                self.dashboard.set_kinds(kinds)?;
                write_overview(&self.dashboard.current().overview, self.use_colors, &mut text)?;
            }
            SessionCommand::Regions(selection) => {
                let regions = selection.resolve(&self.dashboard.options().regions);
                self.dashboard.set_regions(regions)?;
                write_overview(&self.dashboard.current().overview, self.use_colors, &mut text)?;
            }
            SessionCommand::Reset => {
                self.dashboard.reset();
                write_controls(self.dashboard.controls(), self.dashboard.options(), self.use_colors, &mut text)?;
                write_overview(&self.dashboard.current().overview, self.use_colors, &mut text)?;
            }
            SessionCommand::Quit => {}
        }

        let _ = writeln!(self.host.output(), "{}", text.trim_end());
        Ok(())
    }
}
