use std::fmt;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use chrono::Local;
use clap::{Parser, ValueEnum};
use d2rfix_core::engine::{self, PatchOutcome};
use d2rfix_core::format;
use d2rfix_core::policy::Policy;
use d2rfix_core::quest;
use serde_json::{Map as JsonMap, Value as JsonValue};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Profile {
    /// Mark normal difficulty complete and open the first Act 3
    /// waypoint in every difficulty.
    Minimal,
    /// Unlock every difficulty, the covered quest data and the first
    /// Act 3 waypoint in every difficulty.
    Full,
}

impl Profile {
    fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
        }
    }

    fn policy(self) -> Policy {
        match self {
            Self::Minimal => Policy::minimal_unlock(),
            Self::Full => Policy::full_unlock(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Unlock progression flags in Diablo II: Resurrected save files")]
struct Cli {
    /// Save file to patch.
    #[arg(value_name = "SAVE.d2s")]
    path: PathBuf,
    /// Which unlock profile to apply.
    #[arg(long, value_enum, default_value_t = Profile::Minimal)]
    profile: Profile,
    /// Additionally mark Act 2 complete in every difficulty.
    #[arg(long = "complete-act2")]
    complete_act2: bool,
    /// Write the patched save here instead of overwriting in place.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Skip the timestamped .bak copy when patching in place.
    #[arg(long = "no-backup")]
    no_backup: bool,
    /// Print the patch outcome as JSON.
    #[arg(long)]
    json: bool,
    /// Wait for Enter before exiting, for drag-and-drop use.
    #[arg(long)]
    pause: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut data = fs::read(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        finish(cli.pause, 1)
    });

    // Check the format before taking a backup, so an unrelated file
    // dropped on the tool is left entirely alone.
    if !format::is_valid(&data) {
        eprintln!(
            "{} is not a recognized D2R save file (too short, bad magic, or version too old)",
            cli.path.display()
        );
        finish(cli.pause, 1)
    }

    let backup_path = if cli.output.is_none() && !cli.no_backup {
        let path = make_backup(&data, &cli.path).unwrap_or_else(|e| {
            eprintln!("Error writing backup for {}: {e}", cli.path.display());
            finish(cli.pause, 1)
        });
        Some(path)
    } else {
        None
    };

    let policy = cli.profile.policy();
    let outcome = engine::apply_with(&mut data, &policy, |buf| {
        if cli.complete_act2 {
            quest::complete_act2_all_difficulties(buf);
        }
    })
    .unwrap_or_else(|e| {
        eprintln!("Error patching {}: {e}", cli.path.display());
        finish(cli.pause, 1)
    });

    let out_path = cli.output.as_deref().unwrap_or(&cli.path);
    fs::write(out_path, &data).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {e}", out_path.display());
        finish(cli.pause, 1)
    });

    if cli.json {
        let json = outcome_json(&cli, out_path, &outcome, backup_path.as_deref());
        let rendered = serde_json::to_string_pretty(&JsonValue::Object(json))
            .expect("patch outcome is always representable as JSON");
        println!("{rendered}");
    } else {
        if let Some(backup) = &backup_path {
            println!("Backup written to {}", backup.display());
        }
        println!(
            "Patched {} ({} profile, {} edits, checksum {})",
            out_path.display(),
            cli.profile.as_str(),
            outcome.edits_applied,
            format_checksum(outcome.checksum),
        );
    }

    finish(cli.pause, 0)
}

/// Byte-identical copy of the unpatched file, written alongside it as
/// `<name>.<yyyyMMddHHmmssfff>.bak`. A leftover backup with the same
/// generated name is overwritten.
fn make_backup(data: &[u8], path: &Path) -> io::Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d%H%M%S%3f");
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let backup_path = path.with_file_name(format!("{file_name}.{stamp}.bak"));
    fs::write(&backup_path, data)?;
    Ok(backup_path)
}

fn outcome_json(
    cli: &Cli,
    out_path: &Path,
    outcome: &PatchOutcome,
    backup_path: Option<&Path>,
) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();
    out.insert(
        "path".to_string(),
        JsonValue::String(out_path.display().to_string()),
    );
    out.insert(
        "profile".to_string(),
        JsonValue::String(cli.profile.as_str().to_string()),
    );
    out.insert(
        "complete_act2".to_string(),
        JsonValue::Bool(cli.complete_act2),
    );
    out.insert(
        "edits_applied".to_string(),
        JsonValue::from(outcome.edits_applied),
    );
    out.insert(
        "checksum".to_string(),
        JsonValue::String(format_checksum(outcome.checksum)),
    );
    if let Some(backup) = backup_path {
        out.insert(
            "backup".to_string(),
            JsonValue::String(backup.display().to_string()),
        );
    }
    out
}

fn format_checksum(checksum: [u8; 4]) -> String {
    checksum.iter().map(|b| format!("{b:02x}")).collect()
}

fn finish(pause: bool, code: i32) -> ! {
    if pause {
        println!("Press Enter to close");
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
    process::exit(code)
}
