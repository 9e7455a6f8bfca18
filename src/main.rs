#![deny(missing_docs)]

//! Entry point for the egui-based survival prediction form.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::path::PathBuf;

use eframe::egui;
use titanic_survival::egui_app::controller::PredictionController;
use titanic_survival::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use titanic_survival::egui_app::view_model;
use titanic_survival::{load_model_with_config, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let explicit_model = model_path_arg(std::env::args().skip(1));
    let launch = load_model_with_config(explicit_model.as_deref()).map(|(cfg, model, path)| {
        let info = view_model::model_info(&model, &path);
        PredictionController::new(model, info, &cfg.form)
    });
    if let Err(err) = &launch {
        tracing::error!("{err}");
        eprintln!("{err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Titanic Survival Prediction")
        .with_inner_size(MIN_VIEWPORT_SIZE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Titanic Survival Prediction",
        native_options,
        Box::new(move |_cc| match launch {
            Ok(controller) => Ok(Box::new(EguiApp::new(controller))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

/// Accept `--model <path>` or `--model=<path>`.
fn model_path_arg(args: impl Iterator<Item = String>) -> Option<PathBuf> {
    let mut args = args;
    while let Some(arg) = args.next() {
        if arg == "--model" {
            return args.next().map(PathBuf::from);
        }
        if let Some(value) = arg.strip_prefix("--model=") {
            return Some(PathBuf::from(value));
        }
    }
    None
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start");
                ui.label(&self.message);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn model_flag_forms() {
        assert_eq!(
            model_path_arg(args(&["--model", "a.json"])),
            Some(PathBuf::from("a.json"))
        );
        assert_eq!(
            model_path_arg(args(&["--model=b.json"])),
            Some(PathBuf::from("b.json"))
        );
        assert_eq!(model_path_arg(args(&["--model"])), None);
        assert_eq!(model_path_arg(args(&[])), None);
    }
}
