/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::io::Read;
use std::process::ExitCode;

use log::{error, info, warn};
use mindcanvas::prefs::{CliOptions, cli_options};
use mindcanvas::{CanvasEngine, Command, EngineConfig};

fn read_script(opts: &CliOptions) -> std::io::Result<String> {
    match &opts.script {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        },
    }
}

fn main() -> ExitCode {
    let opts = cli_options().run();
    mindcanvas::init_tracing(opts.log_filter.as_deref());

    let config = match &opts.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            },
        },
        None => EngineConfig::default(),
    };

    let script = match read_script(&opts) {
        Ok(script) => script,
        Err(e) => {
            error!("Failed to read command script: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut engine = CanvasEngine::new(config);
    let mut rejected = 0usize;
    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        // Blank lines and `#` comments are skipped.
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command: Command = match serde_json::from_str(line) {
            Ok(command) => command,
            Err(e) => {
                error!("Line {}: not a command: {e}", index + 1);
                return ExitCode::FAILURE;
            },
        };
        if let Err(e) = engine.apply_command(command) {
            warn!("Line {}: command rejected: {e}", index + 1);
            rejected += 1;
        }
    }
    info!(
        "Replayed script: {} nodes, {} edges, {rejected} rejected",
        engine.graph().node_count(),
        engine.graph().edge_count()
    );

    let document = engine.export_snapshot();
    let rendered = if opts.pretty {
        document.to_json_pretty()
    } else {
        document.to_json()
    };
    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("Failed to serialize document: {e}");
            ExitCode::FAILURE
        },
    }
}
