mod cli;
mod config;
mod infrastructure;
mod render;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use ryonkt_core::ports::{Confirm, KeyValueStore, SystemClock};
use ryonkt_core::services::{ContentPersistence, Dashboard};
use ryonkt_core::CoreError;
use ryonkt_storage::MemoryKeyValueStore;

use crate::cli::{Cli, DashboardCommand, Request, WorksAction};
use crate::config::LoggingConfig;
use crate::infrastructure::confirm::StdinConfirm;
use crate::infrastructure::logging;
use crate::render::{AboutFields, ContactFields, DashboardOverview, SitePage, WorksTable};

/// Entry point of the `ryonkt` binary.
pub fn run() -> anyhow::Result<()> {
  let cli = Cli::parse();

  // Logging comes first so config problems below are reported.
  let logging_cfg = LoggingConfig::load();
  let level = logging_cfg.as_ref().map(|c| c.level.clone()).unwrap_or_else(|_| LoggingConfig::default().level);
  logging::init(&level);
  if let Err(e) = logging_cfg {
    warn!(error = %e, "could not read [logging], using defaults");
  }

  // The route is decided once here and only passed down.
  let request = cli.command.into_request();
  info!(route = %request.route(), ephemeral = cli.ephemeral, "starting");

  if cli.ephemeral {
    execute(ContentPersistence::new(MemoryKeyValueStore::new()), request)
  } else {
    let persistence = ryonkt_storage::open_persistence_from_config().context("open content store")?;
    execute(persistence, request)
  }
}

fn execute<S: KeyValueStore>(persistence: ContentPersistence<S>, request: Request) -> anyhow::Result<()> {
  match request {
    Request::Site(view) => {
      // read-only surface: load, never save
      let bundle = persistence.load().context("load content")?;
      print!("{}", SitePage { bundle: &bundle, view: &view });
      Ok(())
    }
    Request::Dashboard(command) => {
      let dashboard = Dashboard::open(persistence, SystemClock).context("open dashboard")?;
      run_dashboard(dashboard, command)
    }
  }
}

fn run_dashboard<S: KeyValueStore>(
  mut d: Dashboard<S, SystemClock>,
  command: DashboardCommand,
) -> anyhow::Result<()> {
  match command {
    DashboardCommand::Overview => print!("{}", DashboardOverview(d.bundle())),

    DashboardCommand::Works(action) => match action {
      WorksAction::List => print!("{}", WorksTable(d.works())),

      WorksAction::Add(fields) => {
        let id = d.add_work().context("add work")?;
        if fields.is_empty() {
          d.cancel_edit();
        } else {
          if let Some(draft) = d.work_draft_mut() {
            fields.apply(draft);
          }
          d.commit_edit().context("save new work")?;
        }
        println!("added work {id}");
      }

      WorksAction::Edit { id, fields } => {
        if !d.begin_work_edit(id) {
          return Err(CoreError::NotFound(id).into());
        }
        if fields.is_empty() {
          d.cancel_edit();
          println!("nothing to change for work {id}");
        } else {
          if let Some(draft) = d.work_draft_mut() {
            fields.apply(draft);
          }
          d.commit_edit().with_context(|| format!("update work {id}"))?;
          println!("updated work {id}");
        }
      }

      WorksAction::Delete { id, yes } => {
        if d.delete_work(id, &StdinConfirm::new(yes)).with_context(|| format!("delete work {id}"))? {
          println!("deleted work {id}");
        } else {
          println!("work {id} kept");
        }
      }
    },

    DashboardCommand::About(args) => {
      if !args.is_empty() {
        d.begin_about_edit();
        if let Some(draft) = d.about_draft_mut() {
          args.apply(draft);
        }
        d.commit_edit().context("save about")?;
      }
      print!("{}", AboutFields(d.bundle()));
    }

    DashboardCommand::Contact(args) => {
      if !args.is_empty() {
        d.begin_contact_edit();
        if let Some(draft) = d.contact_draft_mut() {
          args.apply(draft);
        }
        d.commit_edit().context("save contact")?;
      }
      print!("{}", ContactFields(d.bundle()));
    }

    DashboardCommand::Export => {
      let json = serde_json::to_string_pretty(d.bundle()).context("serialize content")?;
      println!("{json}");
    }

    DashboardCommand::Reset { yes } => {
      if StdinConfirm::new(yes).confirm("Replace all content with the built-in defaults?") {
        d.reset_to_default().context("reset content")?;
        println!("content reset ({} works)", d.works().len());
      } else {
        println!("nothing changed");
      }
    }
  }

  Ok(())
}
