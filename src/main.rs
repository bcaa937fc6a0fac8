//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` on a local HTTP server.

use std::io;
use std::process::{Command, ExitCode, Stdio};

const PORT: &str = "8000";

fn main() -> io::Result<ExitCode> {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!(
                "wasm-pack finished with errors. Ensure wasm-pack is installed \
                 (https://rustwasm.github.io/wasm-pack/)."
            );
            return Ok(ExitCode::FAILURE);
        }
        Err(_) => {
            eprintln!(
                "wasm-pack not found in PATH. Skipping wasm build; \
                 the page may load a stale bundle."
            );
        }
    }

    println!("Serving static/ at http://127.0.0.1:{PORT} …");
    let status = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .status()?;

    Ok(if status.success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
