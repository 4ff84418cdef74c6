//! SCOTUS Strategic Engine CLI
//!
//! Usage:
//!   scotus-engine --text "brief text"               # Single analysis
//!   scotus-engine --sample louisiana                 # Built-in sample case
//!   scotus-engine --docket 24-109 --file pet.pdf     # Metadata-only intake
//!   scotus-engine --interactive                      # Analysis + chat REPL
//!   scotus-engine --serve                            # HTTP API server
//!   scotus-engine --sample ftc-removal --json        # JSON output

use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use scotus_engine::core::session::{apply_rewrite, reset, select_segment, simulate, simulate_full_bench};
use scotus_engine::core::{run_server, FallbackBackend, Pacing, Session, SAMPLE_CASES};
use scotus_engine::types::{
    AnalysisResult, AppState, ChatMessage, ChatRole, ClassificationInput, FileDescriptor, Persona,
    PersonaQuestion, PostureSelection, RenderedBrief, SegmentFeedback, TrapKind,
};
use scotus_engine::{EngineError, API_BASE, DEFAULT_SERVER_ADDR, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "scotus-engine",
    version = VERSION,
    about = "SCOTUS Strategic Engine - adversarial analysis of Supreme Court briefs",
    long_about = "Classifies case materials, detects procedural posture and legal issues,\n\
                  and produces a strategic dashboard: precedents, traps, a risk table and\n\
                  simulated questions from the bench.\n\n\
                  Modes:\n  \
                  (default)      Single analysis of --text / --text-file / --docket / --file\n  \
                  --sample       Analyze and annotate a built-in sample case\n  \
                  --interactive  Analysis followed by a chat REPL\n  \
                  --serve        HTTP API server\n\n\
                  Tiers:\n  \
                  A  - Full materials (long brief or 2+ files)\n  \
                  B  - Partial materials\n  \
                  C  - Minimal materials (docket only / short excerpt)"
)]
struct Args {
    /// Brief text to analyze
    #[arg(short, long)]
    text: Option<String>,

    /// Read brief text from a file
    #[arg(long)]
    text_file: Option<String>,

    /// Attached file (metadata only; repeatable, non-PDF files are skipped)
    #[arg(short, long)]
    file: Vec<String>,

    /// Docket number, e.g. 24-109
    #[arg(short, long)]
    docket: Option<String>,

    /// Case title
    #[arg(long, default_value = "")]
    title: String,

    /// Procedural posture: auto, cert, emergency or merits
    #[arg(short, long, default_value = "auto")]
    posture: String,

    /// Load a built-in sample case
    #[arg(long)]
    sample: Option<String>,

    /// List the built-in sample cases
    #[arg(long)]
    list_samples: bool,

    /// Simulate a Justice after the analysis (repeatable)
    #[arg(long)]
    justice: Vec<String>,

    /// Simulate the full bench after the analysis
    #[arg(long)]
    bench: bool,

    /// Chat message to send after the analysis (repeatable)
    #[arg(long)]
    chat: Vec<String>,

    /// Interactive mode - chat and bench commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = DEFAULT_SERVER_ADDR)]
    addr: String,

    /// Remote analysis backend base URL
    #[arg(long, default_value = API_BASE)]
    backend: String,

    /// Never call the remote backend
    #[arg(long)]
    offline: bool,

    /// Pause between pipeline stages like the web client does
    #[arg(long)]
    pace: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show detected issues and the annotated brief
    #[arg(long)]
    verbose: bool,
}

/// Everything a single run produced, for `--json`
#[derive(Serialize)]
struct Report<'a> {
    analysis: Option<&'a AnalysisResult>,
    brief: Option<&'a RenderedBrief>,
    questions: &'a [PersonaQuestion],
    chat: &'a [ChatMessage],
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let result = if args.serve {
        run_serve(&args).await
    } else if args.list_samples {
        print_samples(args.json)
    } else if args.interactive {
        run_interactive(&args).await
    } else {
        run_single(&args).await
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean
fn init_tracing(verbose: bool) {
    let default = if verbose { "scotus_engine=debug" } else { "scotus_engine=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn build_session(args: &Args) -> Session {
    let backend = if args.offline {
        FallbackBackend::local_only()
    } else {
        FallbackBackend::remote(args.backend.as_str())
    };
    Session::new(backend, Pacing::new(args.pace))
}

/// Assemble the submission; non-PDF attachments never reach the engine
fn build_input(args: &Args) -> Result<ClassificationInput, EngineError> {
    let text = match (&args.text, &args.text_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let files = args
        .file
        .iter()
        .map(|path| FileDescriptor::from_path(path))
        .filter(|f| {
            if !f.is_pdf() {
                warn!(file = %f.name, mime = %f.mime_type, "skipping non-PDF attachment");
            }
            f.is_pdf()
        })
        .collect();

    let posture: PostureSelection = args.posture.parse()?;

    Ok(ClassificationInput::new(text)
        .with_title(args.title.as_str())
        .with_files(files)
        .with_docket(args.docket.clone().unwrap_or_default())
        .with_posture(posture))
}

/// Analyze the sample or the submission given on the command line
async fn initial_state(session: &Session, args: &Args) -> Result<AppState, EngineError> {
    let state = AppState::new();
    match &args.sample {
        Some(id) => session.load_sample(&state, id).await,
        None => session.submit_analysis(&state, build_input(args)?).await,
    }
}

/// Run one analysis, then any requested Justices, bench and chat
async fn run_single(args: &Args) -> Result<(), EngineError> {
    let session = build_session(args);
    let mut state = initial_state(&session, args).await?;
    let mut questions = Vec::new();

    for id in &args.justice {
        let persona: Persona = id.parse()?;
        let (next, question) = simulate(&state, persona)?;
        state = next;
        questions.push(question);
    }
    if args.bench {
        let (next, bench) = simulate_full_bench(&state)?;
        state = next;
        questions.extend(bench);
    }
    let replies_from = state.chat_history.len();
    for message in &args.chat {
        state = session.send_chat(&state, message).await;
    }

    if args.json {
        let report = Report {
            analysis: state.current_analysis.as_ref(),
            brief: state.brief.as_ref(),
            questions: &questions,
            chat: &state.chat_history,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(analysis) = &state.current_analysis {
        print_dashboard(analysis, args.verbose);
    }
    if args.verbose || args.sample.is_some() {
        if let Some(brief) = &state.brief {
            print_brief(brief);
        }
    }
    for question in &questions {
        print_question(question);
    }
    print_chat(&state.chat_history[replies_from..]);
    Ok(())
}

/// Run interactive mode
async fn run_interactive(args: &Args) -> Result<(), EngineError> {
    let session = build_session(args);

    print_header("Interactive Mode");
    let mut state = if args.sample.is_some()
        || args.text.is_some()
        || args.text_file.is_some()
        || args.docket.is_some()
        || !args.file.is_empty()
    {
        let state = initial_state(&session, args).await?;
        if let Some(analysis) = &state.current_analysis {
            print_dashboard(analysis, args.verbose);
        }
        print_chat(&state.chat_history);
        state
    } else {
        println!("No case loaded. Use /sample <id> or /analyze <text> to begin.");
        AppState::new()
    };
    print_help();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", "⚖ >".bold());
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Messages: {}", state.chat_history.len());
            break;
        }
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        // A failed command leaves the state as it was
        let outcome = match command {
            "/help" => {
                print_help();
                Ok(state.clone())
            }
            "/samples" => print_samples(false).map(|_| state.clone()),
            "/sample" => session.load_sample(&state, rest).await.map(|next| {
                if let Some(analysis) = &next.current_analysis {
                    print_dashboard(analysis, args.verbose);
                }
                print_last(&next.chat_history);
                next
            }),
            "/analyze" => {
                let input = ClassificationInput::new(rest);
                session.submit_analysis(&state, input).await.map(|next| {
                    if let Some(analysis) = &next.current_analysis {
                        print_dashboard(analysis, args.verbose);
                    }
                    next
                })
            }
            "/brief" => match &state.brief {
                Some(brief) => {
                    print_brief(brief);
                    Ok(state.clone())
                }
                None => Err(EngineError::NoBrief),
            },
            "/justice" => rest.parse::<Persona>().and_then(|persona| {
                simulate(&state, persona).map(|(next, question)| {
                    print_question(&question);
                    next
                })
            }),
            "/bench" => simulate_full_bench(&state).map(|(next, questions)| {
                for question in &questions {
                    print_question(question);
                }
                next
            }),
            "/segment" => select_segment(&state, rest).map(|(next, panel)| {
                print_segment_feedback(&panel);
                next
            }),
            "/apply" => apply_rewrite(&state, rest).map(|next| {
                if let Some(brief) = &next.brief {
                    print_brief(brief);
                }
                print_last(&next.chat_history);
                next
            }),
            "/reset" => {
                println!("Session reset.");
                Ok(reset(&state))
            }
            _ => {
                let before = state.chat_history.len();
                let next = session.send_chat(&state, line).await;
                print_chat(&next.chat_history[before..]);
                Ok(next)
            }
        };

        match outcome {
            Ok(next) => state = next,
            Err(e) => println!("{} {}", "⚠".yellow(), e),
        }
    }

    Ok(())
}

/// Run HTTP API server
async fn run_serve(args: &Args) -> Result<(), EngineError> {
    print_header("API Server");
    if let Err(e) = run_server(&args.addr).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

// =============================================================================
// TERMINAL RENDERING
// =============================================================================

fn print_header(mode: &str) {
    println!("{}", "═".repeat(60).bold());
    println!("{}", format!("  SCOTUS Strategic Engine v{} - {}", VERSION, mode).bold());
    println!("{}", "═".repeat(60).bold());
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  /sample <id>     Load a sample case (see /samples)");
    println!("  /analyze <text>  Analyze pasted text");
    println!("  /justice <id>    Simulate one Justice");
    println!("  /bench           Simulate the full bench");
    println!("  /brief           Show the annotated brief");
    println!("  /segment <id>    Show feedback for a brief segment");
    println!("  /apply <id>      Apply a segment's suggested rewrite");
    println!("  /reset           Start over");
    println!("  quit             Exit");
    println!("Anything else is sent to the strategy chat.");
    println!();
}

fn print_samples(json: bool) -> Result<(), EngineError> {
    if json {
        #[derive(Serialize)]
        struct Entry {
            id: &'static str,
            title: &'static str,
            docket: &'static str,
        }
        let entries: Vec<_> = SAMPLE_CASES
            .iter()
            .map(|c| Entry { id: c.id, title: c.title, docket: c.docket })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for case in &SAMPLE_CASES {
        println!("  {:<14} {} (No. {})", case.id.bold(), case.title, case.docket);
    }
    Ok(())
}

fn print_dashboard(analysis: &AnalysisResult, verbose: bool) {
    println!();
    println!("{}", analysis.title.bold().underline());
    println!(
        "  Tier {} ({}) | {} | {} {} | DIG risk: {}",
        analysis.tier.to_string().bold(),
        analysis.tier.description(),
        analysis.posture.label(),
        analysis.risk_level.emoji(),
        analysis.risk_level.to_string().color(analysis.risk_level.color()).bold(),
        analysis.dig_risk
    );
    if verbose {
        let labels = analysis.issues.active_labels();
        let issues = if labels.is_empty() { "none".to_string() } else { labels.join(", ") };
        println!("  Issues: {}", issues.dimmed());
    }
    println!();
    println!("{} {}", "Primary obstacle:".bold(), analysis.primary_obstacle);
    println!("{} {}", "Rewrite directive:".bold(), analysis.rewrite_directive);

    println!();
    println!("{}", "PRECEDENTS".bold());
    for p in &analysis.precedents {
        println!(
            "  [{}] {}",
            p.risk.as_str().to_uppercase().color(p.risk.color()),
            p.citation
        );
        println!("        {}", p.relevance.dimmed());
        println!("        {}", p.url.dimmed());
    }

    println!();
    println!("{}", "STRATEGIC TRAPS".bold());
    for t in &analysis.traps {
        let label = match t.kind {
            TrapKind::Trap => t.kind.label().red(),
            TrapKind::Counter => t.kind.label().green(),
        };
        println!("  {} {}", label, t.text);
    }

    println!();
    println!("{}", "RISK TABLE".bold());
    for r in &analysis.risks {
        println!(
            "  {:<24} {:<8} {}",
            r.category,
            r.level.as_str().to_uppercase().color(r.level.color()),
            r.confidence.dimmed()
        );
    }

    println!();
    println!("{}", "QUESTIONS FROM THE BENCH".bold());
    for q in &analysis.justice_questions {
        print_question(q);
    }
}

fn print_question(q: &PersonaQuestion) {
    println!(
        "  {} {}",
        q.name.color(q.persona.color()).bold(),
        format!("({})", q.focus).dimmed()
    );
    println!("    \"{}\"", q.question);
    println!("    {} {}", "Pressure:".bold(), q.pressure);
    println!();
}

fn print_brief(brief: &RenderedBrief) {
    println!();
    println!("{}", "BRIEF".bold());
    let text = brief.render(|segment| {
        format!("[{}] {}", segment.id, segment.display)
            .color(segment.display_severity.color())
            .underline()
            .to_string()
    });
    println!("{}", text);
    println!();
    for segment in &brief.segments {
        println!(
            "  {} {} - {}",
            segment.id.bold(),
            segment.feedback.persona.name().color(segment.feedback.persona.color()),
            segment.display_severity.to_string().color(segment.display_severity.color())
        );
    }
    println!();
}

fn print_segment_feedback(panel: &SegmentFeedback) {
    println!(
        "{} {}",
        panel.persona_name.color(panel.persona.color()).bold(),
        panel.severity.to_string().to_uppercase().color(panel.severity.color())
    );
    println!("  {}", panel.explanation);
    println!("  {} {}", "Suggested:".bold(), panel.rewrite.italic());
    println!("  (apply with /apply {})", panel.segment_id);
    println!();
}

fn print_last(messages: &[ChatMessage]) {
    print_chat(&messages[messages.len().saturating_sub(1)..]);
}

fn print_chat(messages: &[ChatMessage]) {
    for m in messages {
        match m.role {
            ChatRole::User => println!("{} {}", "you:".cyan().bold(), m.content),
            ChatRole::Assistant => println!("{}\n{}\n", "engine:".magenta().bold(), m.content),
        }
    }
}
