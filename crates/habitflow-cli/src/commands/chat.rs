use habitflow_core::{Assistant, Config, OpenAiAssistant};

pub fn run(prompt: &str) -> Result<(), Box<dyn std::error::Error>> {
    if prompt.trim().is_empty() {
        eprintln!("please enter a valid message");
        std::process::exit(1);
    }

    let config = Config::load_or_default();
    let assistant = OpenAiAssistant::from_env(&config.assistant);

    // Every reply, error-shaped or not, is display text.
    let reply = assistant.ask(prompt);
    println!("HabitFlow: {reply}");
    Ok(())
}
