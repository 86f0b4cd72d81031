use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

// Import from our modular crates
use orator_cli::{
    SpeechComposer, audience_entries, confirm, display_banner, display_report,
    handle_input_with_history, print_help, read_multiline_input, style_entries,
};
use orator_coach::PresentationCoach;
use orator_core::{LlmProvider, SpeechMetadata, SpeechRequest, TtsProvider, Voice};
use orator_groq::{AVAILABLE_MODELS, DEFAULT_MODEL, GroqClient};

#[derive(Parser)]
#[command(name = "orator")]
#[command(about = "AI-powered speechwriting and presentation coaching", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a speech from a topic
    Generate {
        /// Speech topic
        #[arg(short, long)]
        topic: String,

        /// Target duration in minutes
        #[arg(short, long, default_value_t = 3)]
        duration: u32,

        /// Speech style (see `orator styles`)
        #[arg(short, long, default_value = "motivational")]
        style: String,

        /// Target audience (see `orator styles`)
        #[arg(short, long, default_value = "general public")]
        audience: String,

        /// Model id (see `orator models`)
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Sampling temperature
        #[arg(long, default_value_t = 0.7)]
        temperature: f32,

        /// Extra instructions for the speechwriter
        #[arg(long)]
        instructions: Option<String>,

        /// Also synthesize audio with this voice (male or female)
        #[arg(long)]
        voice: Option<String>,

        /// Save the speech text to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyze a speech and get coaching feedback
    Coach {
        /// Read the speech from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available models
    Models,

    /// List the available styles and audiences
    Styles,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            topic,
            duration,
            style,
            audience,
            model,
            temperature,
            instructions,
            voice,
            output,
        }) => {
            let request = SpeechRequest {
                topic,
                duration_minutes: duration,
                style,
                audience,
                model,
                temperature,
                additional_instructions: instructions,
            };
            run_generate(request, voice, output).await
        }
        Some(Commands::Coach { file, json }) => run_coach(file, json),
        Some(Commands::Models) => {
            print_models();
            Ok(())
        }
        Some(Commands::Styles) => {
            print_styles();
            Ok(())
        }
        None => run_interactive().await,
    }
}

async fn run_generate(
    request: SpeechRequest,
    voice: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let voice = match voice {
        Some(name) => Some(Voice::parse(&name).ok_or_else(|| {
            anyhow::anyhow!("Unknown voice '{}'; expected 'male' or 'female'", name)
        })?),
        None => None,
    };

    let mut client = GroqClient::from_env()?;
    client.connect().await?;
    let composer = SpeechComposer::new(client);

    println!("{} Generating your speech...", "🤖".blue());
    let (speech, metadata) = composer.compose(&request).await?;

    println!(
        "{} Speech generated with {} words (~{} minutes)",
        "✅".green(),
        metadata.word_count,
        request.duration_minutes
    );
    print_metadata(&metadata);
    println!();
    println!("{}", speech);
    println!();

    if let Some(path) = output {
        fs::write(&path, &speech)?;
        println!("{} Speech text saved to {}", "📝".green(), path.display());
    }

    if let Some(voice) = voice {
        println!("{} Converting text to speech...", "🎵".blue());
        let audio = composer.provider().synthesize(&speech, voice).await?;
        println!(
            "{} Audio ({} KiB) saved to {}",
            "✅".green(),
            audio.byte_len / 1024,
            audio.path.display()
        );
    }

    Ok(())
}

fn run_coach(file: Option<PathBuf>, json: bool) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let coach = PresentationCoach::new();
    let report = coach.analyze(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    Ok(())
}

fn print_metadata(metadata: &SpeechMetadata) {
    println!(
        "  {} {}  {} {}  {} {}  {} {}",
        "Topic:".dimmed(),
        metadata.topic,
        "Style:".dimmed(),
        metadata.style,
        "Audience:".dimmed(),
        metadata.audience,
        "Model:".dimmed(),
        metadata.model
    );
}

fn print_models() {
    println!("{}", "Available models:".bold());
    for model in AVAILABLE_MODELS {
        let marker = if model.id == DEFAULT_MODEL { "*" } else { " " };
        println!(
            "  {} {} - {}",
            marker.green(),
            model.id.bold(),
            model.description
        );
    }
    println!();
    println!("{}", "* default model".dimmed());
}

fn print_styles() {
    println!("{}", "Speech styles:".bold());
    for (name, guidance) in style_entries() {
        println!("  {} - {}", name.green(), guidance);
    }
    println!();
    println!("{}", "Audiences:".bold());
    for (name, guidance) in audience_entries() {
        println!("  {} - {}", name.green(), guidance);
    }
}

async fn run_interactive() -> Result<()> {
    display_banner();

    let coach = PresentationCoach::new();
    let mut composer: Option<SpeechComposer<GroqClient>> = None;
    let mut history = Vec::new();

    loop {
        let input = handle_input_with_history(&mut history).await?;

        if input.is_empty() {
            continue;
        }

        let input_lower = input.to_lowercase();

        // Handle special commands
        if input_lower == "exit" || input_lower == "quit" {
            println!("{}", "👋 Goodbye!".green());
            break;
        }

        if input_lower == "help" {
            print_help();
            continue;
        }

        if input_lower == "coach" {
            let text = read_multiline_input("Paste your speech; finish with an empty line:")?;
            if text.trim().is_empty() {
                println!("{} Nothing to analyze", "⚠️".yellow());
                continue;
            }
            display_report(&coach.analyze(&text));
            continue;
        }

        // Anything else is a topic to write about
        let topic = input
            .strip_prefix("generate ")
            .map(str::trim)
            .unwrap_or(input.trim());

        if composer.is_none() {
            match connect_client().await {
                Ok(client) => composer = Some(SpeechComposer::new(client)),
                Err(e) => {
                    println!("{} {}", "⚠️".yellow(), e);
                    println!(
                        "{}",
                        "Set GROQ_API_KEY to enable speech generation; 'coach' works offline."
                            .dimmed()
                    );
                    continue;
                }
            }
        }
        let Some(active) = composer.as_ref() else {
            continue;
        };

        let request = SpeechRequest {
            topic: topic.to_string(),
            ..Default::default()
        };

        println!("{} Generating...", "🤖".blue());

        match active.compose(&request).await {
            Ok((speech, metadata)) => {
                println!();
                println!("{}", speech);
                println!();
                println!(
                    "{} {} words (~{} minutes)",
                    "✅".green(),
                    metadata.word_count,
                    request.duration_minutes
                );

                if confirm("Generate audio from this speech?").await? {
                    match active.provider().synthesize(&speech, Voice::Female).await {
                        Ok(audio) => {
                            println!("{} Audio saved to {}", "🎵".green(), audio.path.display())
                        }
                        Err(e) => println!("{} Audio generation failed: {}", "❌".red(), e),
                    }
                }
            }
            Err(e) => {
                println!("{} Generation failed: {}", "❌".red(), e);
            }
        }
    }

    Ok(())
}

async fn connect_client() -> Result<GroqClient> {
    let mut client = GroqClient::from_env()?;
    client.connect().await?;
    Ok(client)
}
