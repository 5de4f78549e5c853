pub mod ollama_handler;
