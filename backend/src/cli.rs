use clap::{Args, Parser, Subcommand};
use ryonkt_core::domain::{About, Contact, Work, WorkId};
use ryonkt_core::site::{Section, SiteView};
use ryonkt_core::Route;

#[derive(Debug, Parser)]
#[command(name = "ryonkt", version, about = "ryonkt portfolio site and content dashboard")]
pub struct Cli {
  /// Keep content in memory for this run only; nothing is read from or written to disk.
  #[arg(long, global = true, env = "RYONKT_EPHEMERAL")]
  pub ephemeral: bool,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Resolve a URL path to the public site or the dashboard and show its landing view.
  Open {
    /// e.g. `/` or `/dashboard`
    path: String,
  },

  /// Render a section of the public site.
  Site {
    #[arg(long, default_value = "home")]
    section: Section,

    /// Toggle a year in the works section; repeat to toggle again.
    #[arg(long = "expand", value_name = "YEAR")]
    expand: Vec<String>,
  },

  /// Manage the discography.
  Works {
    #[command(subcommand)]
    action: WorksAction,
  },

  /// Show the about text, or replace fields of it.
  About(AboutArgs),

  /// Show the contact record, or replace fields of it.
  Contact(ContactArgs),

  /// Print the stored content as JSON.
  Export,

  /// Replace all content with the built-in defaults.
  Reset {
    #[arg(long, short)]
    yes: bool,
  },
}

#[derive(Debug, Subcommand)]
pub enum WorksAction {
  /// List works in display order.
  List,
  /// Add a work at the top (placeholder values unless given).
  Add(WorkFields),
  /// Replace fields of an existing work.
  Edit {
    id: WorkId,
    #[command(flatten)]
    fields: WorkFields,
  },
  /// Delete a work after confirmation.
  Delete {
    id: WorkId,
    #[arg(long, short)]
    yes: bool,
  },
}

#[derive(Debug, Default, Args)]
pub struct WorkFields {
  #[arg(long)]
  pub title: Option<String>,
  #[arg(long)]
  pub year: Option<String>,
  /// Album, EP, Single, Live Recording, Compilation, or any other text.
  #[arg(long = "type", value_name = "TYPE")]
  pub kind: Option<String>,
  #[arg(long)]
  pub url: Option<String>,
  #[arg(long)]
  pub label: Option<String>,
  #[arg(long)]
  pub note: Option<String>,
}

impl WorkFields {
  pub fn is_empty(&self) -> bool {
    self.title.is_none()
      && self.year.is_none()
      && self.kind.is_none()
      && self.url.is_none()
      && self.label.is_none()
      && self.note.is_none()
  }

  pub fn apply(self, work: &mut Work) {
    if let Some(title) = self.title {
      work.title = title;
    }
    if let Some(year) = self.year {
      work.year = year;
    }
    if let Some(kind) = self.kind {
      work.kind = kind.into();
    }
    if let Some(url) = self.url {
      work.url = url;
    }
    if let Some(label) = self.label {
      work.label = label;
    }
    if let Some(note) = self.note {
      work.note = note;
    }
  }
}

#[derive(Debug, Default, Args)]
pub struct AboutArgs {
  #[arg(long)]
  pub description1: Option<String>,
  #[arg(long)]
  pub description2: Option<String>,
  #[arg(long)]
  pub techniques: Option<String>,
  #[arg(long)]
  pub influences: Option<String>,
  #[arg(long)]
  pub tools: Option<String>,
}

impl AboutArgs {
  pub fn is_empty(&self) -> bool {
    self.description1.is_none()
      && self.description2.is_none()
      && self.techniques.is_none()
      && self.influences.is_none()
      && self.tools.is_none()
  }

  pub fn apply(self, about: &mut About) {
    if let Some(v) = self.description1 {
      about.description1 = v;
    }
    if let Some(v) = self.description2 {
      about.description2 = v;
    }
    if let Some(v) = self.techniques {
      about.techniques = v;
    }
    if let Some(v) = self.influences {
      about.influences = v;
    }
    if let Some(v) = self.tools {
      about.tools = v;
    }
  }
}

#[derive(Debug, Default, Args)]
pub struct ContactArgs {
  #[arg(long)]
  pub email: Option<String>,
  #[arg(long)]
  pub bandcamp: Option<String>,
  #[arg(long)]
  pub soundcloud: Option<String>,
  #[arg(long)]
  pub instagram: Option<String>,
}

impl ContactArgs {
  pub fn is_empty(&self) -> bool {
    self.email.is_none() && self.bandcamp.is_none() && self.soundcloud.is_none() && self.instagram.is_none()
  }

  pub fn apply(self, contact: &mut Contact) {
    if let Some(v) = self.email {
      contact.email = v;
    }
    if let Some(v) = self.bandcamp {
      contact.bandcamp = v;
    }
    if let Some(v) = self.soundcloud {
      contact.soundcloud = v;
    }
    if let Some(v) = self.instagram {
      contact.instagram = v;
    }
  }
}

/// What a command asks for, already split by surface.
#[derive(Debug)]
pub enum Request {
  /// Read-only render of the public site.
  Site(SiteView),
  Dashboard(DashboardCommand),
}

#[derive(Debug)]
pub enum DashboardCommand {
  Overview,
  Works(WorksAction),
  About(AboutArgs),
  Contact(ContactArgs),
  Export,
  Reset { yes: bool },
}

impl Request {
  pub fn route(&self) -> Route {
    match self {
      Request::Site(_) => Route::Site,
      Request::Dashboard(_) => Route::Dashboard,
    }
  }
}

impl Command {
  /// Resolves the route once and turns the command into a request for that surface.
  pub fn into_request(self) -> Request {
    match self {
      Command::Open { path } => match Route::from_path(&path) {
        Route::Site => Request::Site(SiteView::new()),
        Route::Dashboard => Request::Dashboard(DashboardCommand::Overview),
      },
      Command::Site { section, expand } => {
        let mut view = SiteView::new();
        view.navigate(section);
        for year in &expand {
          view.toggle_year(year);
        }
        Request::Site(view)
      }
      Command::Works { action } => Request::Dashboard(DashboardCommand::Works(action)),
      Command::About(args) => Request::Dashboard(DashboardCommand::About(args)),
      Command::Contact(args) => Request::Dashboard(DashboardCommand::Contact(args)),
      Command::Export => Request::Dashboard(DashboardCommand::Export),
      Command::Reset { yes } => Request::Dashboard(DashboardCommand::Reset { yes }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;
  use ryonkt_core::domain::WorkType;

  #[test]
  fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_site_section_and_years() {
    let cli = Cli::parse_from(["ryonkt", "site", "--section", "works", "--expand", "2013", "--expand", "2012"]);
    match cli.command {
      Command::Site { section, expand } => {
        assert_eq!(section, Section::Works);
        assert_eq!(expand, vec!["2013", "2012"]);
      }
      other => panic!("unexpected {other:?}"),
    }
  }

  #[test]
  fn rejects_unknown_section() {
    assert!(Cli::try_parse_from(["ryonkt", "site", "--section", "shop"]).is_err());
  }

  fn route_of(args: &[&str]) -> Route {
    Cli::parse_from(args.iter().copied()).command.into_request().route()
  }

  #[test]
  fn routes_commands() {
    assert_eq!(route_of(&["ryonkt", "open", "/dashboard"]), Route::Dashboard);
    assert_eq!(route_of(&["ryonkt", "open", "/"]), Route::Site);
    assert_eq!(route_of(&["ryonkt", "site"]), Route::Site);
    assert_eq!(route_of(&["ryonkt", "works", "list"]), Route::Dashboard);
    assert_eq!(route_of(&["ryonkt", "export"]), Route::Dashboard);
  }

  #[test]
  fn site_request_carries_the_view() {
    let cli = Cli::parse_from(["ryonkt", "site", "--section", "works", "--expand", "2013", "--expand", "2013"]);
    let Request::Site(view) = cli.command.into_request() else {
      panic!("expected a site request");
    };
    assert_eq!(view.section(), Section::Works);
    assert_eq!(view.expanded_year(), None);
  }

  #[test]
  fn open_dashboard_shows_overview() {
    let cli = Cli::parse_from(["ryonkt", "open", "/Dashboard"]);
    assert!(matches!(cli.command.into_request(), Request::Dashboard(DashboardCommand::Overview)));
  }

  #[test]
  fn work_fields_patch_only_given_values() {
    let cli = Cli::parse_from(["ryonkt", "works", "edit", "3", "--type", "Live Recording", "--url", ""]);
    let Command::Works { action: WorksAction::Edit { id, fields } } = cli.command else {
      panic!("expected works edit");
    };
    assert_eq!(id, WorkId::new(3));

    let mut work = Work::placeholder(id, 2024);
    work.url = "https://old".into();
    fields.apply(&mut work);

    assert_eq!(work.title, "NEW WORK");
    assert_eq!(work.kind, WorkType::LiveRecording);
    assert_eq!(work.url, "");
  }

  #[test]
  fn empty_args_detected() {
    assert!(AboutArgs::default().is_empty());
    assert!(ContactArgs::default().is_empty());
    assert!(WorkFields::default().is_empty());
  }
}
