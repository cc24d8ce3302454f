#![allow(clippy::exit, clippy::unwrap_used)]
fn main() {
    if std::env::var("PROFILE").unwrap_or_default() == "release" {
        println!("cargo:rustc-env=DEFMT_LOG=off");
    }

    explain_link_errors();
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

/// Registers this build script as the linker's error-handling hook so that
/// missing-symbol failures come with a hint about what is usually wrong.
fn explain_link_errors() {
    let args: Vec<String> = std::env::args().collect();
    if let [_, kind, what, ..] = args.as_slice() {
        if kind != "undefined-symbol" {
            std::process::exit(1);
        }

        let hint = match what.as_str() {
            "_defmt_timestamp" => Some(
                "`defmt` not found - check that `defmt.x` is passed to the linker and `esp_println` is linked",
            ),
            "_stack_start" => Some("Is the linker script `linkall.x` missing?"),
            "esp_rtos_initialized" | "esp_rtos_yield_task" | "esp_rtos_task_create" => {
                Some("`esp_rtos::start` was never called before spawning tasks")
            }
            _ => None,
        };
        if let Some(hint) = hint {
            eprintln!();
            eprintln!("💡 {hint}");
            eprintln!();
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=-Wl,--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
