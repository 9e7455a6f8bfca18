//! Score a single passenger from the command line.

use std::path::PathBuf;

use serde::Serialize;
use titanic_survival::config;
use titanic_survival::passenger::{
    Embarked, PassengerClass, PassengerInput, PredictionRequest, Sex,
};
use titanic_survival::prediction::{Prediction, PredictionInvoker};
use titanic_survival::{load_model_with_config, logging};

fn main() {
    logging::init_stderr();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct CliOptions {
    model_path: Option<PathBuf>,
    pclass: Option<PassengerClass>,
    sex: Option<Sex>,
    age: Option<f32>,
    fare: Option<f32>,
    sibsp: Option<u32>,
    parch: Option<u32>,
    embarked: Option<Embarked>,
    json: bool,
    save_config: bool,
}

#[derive(Debug, Serialize)]
struct FeatureValue {
    column: &'static str,
    value: f32,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    survived: bool,
    label: &'static str,
    probability: f32,
    features: Vec<FeatureValue>,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let (mut cfg, model, model_path) = load_model_with_config(options.model_path.as_deref())?;

    let input = passenger_from(&options, &cfg.form);
    let request = PredictionRequest::encode(&input).map_err(|err| err.to_string())?;
    let invoker = PredictionInvoker::new(model);
    let prediction = invoker.invoke(&request).map_err(|err| err.to_string())?;

    if options.json {
        let report = json_report(&prediction, &request);
        let text = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
        println!("{text}");
    } else {
        println!("Prediction: {}", prediction.label());
        println!("Survival Probability: {}", prediction.probability_text());
    }

    if options.save_config {
        cfg.model.path = model_path;
        config::save(&cfg).map_err(|err| err.to_string())?;
    }
    Ok(())
}

fn passenger_from(options: &CliOptions, form: &config::FormSettings) -> PassengerInput {
    let defaults = PassengerInput::default();
    PassengerInput {
        pclass: options.pclass.unwrap_or(defaults.pclass),
        sex: options.sex.unwrap_or(defaults.sex),
        age: options.age.unwrap_or(form.default_age),
        fare: options.fare.unwrap_or(form.default_fare),
        sibsp: options.sibsp.unwrap_or(defaults.sibsp),
        parch: options.parch.unwrap_or(defaults.parch),
        embarked: options.embarked.unwrap_or(defaults.embarked),
    }
}

fn json_report(prediction: &Prediction, request: &PredictionRequest) -> JsonReport {
    JsonReport {
        survived: prediction.survived,
        label: prediction.label(),
        probability: prediction.probability,
        features: request
            .named_features()
            .map(|(column, value)| FeatureValue { column, value })
            .collect(),
    }
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        let flag = args[idx].as_str();
        match flag {
            "-h" | "--help" => return Err(help_text()),
            "--json" => options.json = true,
            "--save-config" => options.save_config = true,
            "--model" | "--pclass" | "--sex" | "--age" | "--fare" | "--sibsp" | "--parch"
            | "--embarked" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| format!("{flag} requires a value"))?;
                apply_value(&mut options, flag, value)?;
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    if options.save_config && options.model_path.is_none() {
        return Err("--save-config requires --model".to_string());
    }
    Ok(options)
}

fn apply_value(options: &mut CliOptions, flag: &str, value: &str) -> Result<(), String> {
    match flag {
        "--model" => options.model_path = Some(PathBuf::from(value)),
        "--pclass" => options.pclass = Some(value.parse().map_err(|err| format!("{err}"))?),
        "--sex" => options.sex = Some(value.parse().map_err(|err| format!("{err}"))?),
        "--embarked" => options.embarked = Some(value.parse().map_err(|err| format!("{err}"))?),
        "--age" => options.age = Some(parse_number(flag, value)?),
        "--fare" => options.fare = Some(parse_number(flag, value)?),
        "--sibsp" => options.sibsp = Some(parse_count(flag, value)?),
        "--parch" => options.parch = Some(parse_count(flag, value)?),
        _ => return Err(format!("Unknown argument: {flag}")),
    }
    Ok(())
}

fn parse_number(flag: &str, value: &str) -> Result<f32, String> {
    value
        .parse::<f32>()
        .map_err(|_| format!("Invalid {flag} value: {value}"))
}

fn parse_count(flag: &str, value: &str) -> Result<u32, String> {
    value
        .parse::<u32>()
        .map_err(|_| format!("Invalid {flag} value: {value} (expected a non-negative integer)"))
}

fn help_text() -> String {
    [
        "titanic-predict",
        "",
        "Predict whether a Titanic passenger survived.",
        "",
        "Usage:",
        "  titanic-predict [--model <path>] [--pclass 1|2|3] [--sex male|female]",
        "                  [--age <years>] [--fare <amount>] [--sibsp <n>] [--parch <n>]",
        "                  [--embarked C|Q|S] [--json] [--save-config]",
        "",
        "Options:",
        "  --model <path>   Model artifact (default: TITANIC_MODEL_PATH or config model.path)",
        "  --pclass         Passenger class (default: 1)",
        "  --sex            Passenger sex (default: male)",
        "  --age            Age in years, clamped to 1-100 (default: config form.default_age)",
        "  --fare           Ticket fare, at least 0 (default: config form.default_fare)",
        "  --sibsp          Siblings/spouses aboard (default: 0)",
        "  --parch          Parents/children aboard (default: 0)",
        "  --embarked       Port of embarkation (default: C)",
        "  --json           Print a JSON report instead of text",
        "  --save-config    Store --model as the configured model path",
    ]
    .join("\n")
}
