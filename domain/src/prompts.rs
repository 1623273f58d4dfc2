//! Prompt composition for meeting summaries.

/// Instruction used when the caller does not supply one.
pub const DEFAULT_INSTRUCTION: &str =
    "Summarize the meeting notes in a clear and structured format";

const PREAMBLE: &str = "You are an AI assistant that specializes in summarizing meeting transcripts.\n\
Your task is to analyze the provided transcript and create a summary based on the user's specific instructions.";

const SUMMARY_REQUIREMENTS: &str = "Please provide a well-structured, clear, and concise summary that follows the user's requirements.";

const TRANSCRIPT_LABEL: &str = "Meeting transcript to summarize:";

/// Builds the prompt sent to the model.
///
/// Sections always appear in this order: role preamble, the user's instruction,
/// output requirements, then the transcript. Neither input is escaped or trimmed.
pub fn build_summary_prompt(custom_prompt: &str, transcript: &str) -> String {
    format!(
        "{PREAMBLE}\n\nUser's instruction: {custom_prompt}\n\n{SUMMARY_REQUIREMENTS}\n\n{TRANSCRIPT_LABEL}\n{transcript}"
    )
}
