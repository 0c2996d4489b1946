use serde::Serialize;
use tracing::error;
use url::Url;

use crate::api::GeminiApi;
use crate::config::Config;
use crate::db::models::{SymptomLog, User};
use crate::error::AppError;

/// Fallback shown when a myth generation fails or comes back malformed.
const FALLBACK_MYTH: &str = "Going out in the cold weather will give you a cold.";
const FALLBACK_FACT: &str = "Fact: Colds are caused by viruses, not by cold air. \
                             You get sick by being exposed to a virus, often indoors.";

const CHAT_FALLBACK: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";
const TREND_FALLBACK: &str = "Sorry, I was unable to analyze your trends at this time.";
const NO_DATA_MESSAGE: &str = "Not enough data to analyze. Please log more symptoms.";

/// One myth/fact pair for the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MythFact {
    pub myth: String,
    pub fact: String,
}

/// Gateway to the external generative text service.
///
/// The safety rules live in the prompt text only; the external model is the
/// sole enforcer. Every upstream failure is absorbed here and replaced by a
/// fixed safe string, so callers always get usable text.
#[derive(Clone)]
pub struct InsightService {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl InsightService {
    pub fn new(cfg: &Config) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("cognicare/0.1")
            .build()
            .expect("FATAL: initialize InsightService HTTP client failed");
        Self {
            client,
            api_key: cfg.google_api_key.clone(),
            model: cfg.gemini_model.clone(),
            base_url: cfg.gemini_base_url.clone(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        GeminiApi::generate_content(&self.client, &self.base_url, &self.api_key, &self.model, prompt)
            .await
    }

    /// Generate one myth/fact pair. Never fails: malformed or missing
    /// output falls back to the fixed pair.
    pub async fn daily_myth(&self) -> MythFact {
        match self.generate(MYTH_PROMPT).await {
            Ok(text) => parse_myth_fact(&text).unwrap_or_else(|| {
                error!("myth response missing MYTH:/FACT: markers; using fallback");
                fallback_myth()
            }),
            Err(e) => {
                error!(error = %e, "myth generation failed; using fallback");
                fallback_myth()
            }
        }
    }

    /// Personalized chat reply, returned verbatim from the model.
    pub async fn chat_reply(&self, user: &User, message: &str) -> String {
        let prompt = chat_prompt(&user.name, user.age, message);
        match self.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "chat generation failed; using fallback");
                CHAT_FALLBACK.to_string()
            }
        }
    }

    /// Pattern-only trend summary over the caller's full symptom history.
    /// With zero records the external service is not contacted at all.
    pub async fn analyze_trends(&self, user: &User, logs: &[SymptomLog]) -> String {
        if logs.is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }
        let prompt = trend_prompt(&health_summary(user, logs));
        match self.generate(&prompt).await {
            Ok(analysis) => analysis,
            Err(e) => {
                error!(error = %e, "trend analysis failed; using fallback");
                TREND_FALLBACK.to_string()
            }
        }
    }
}

fn fallback_myth() -> MythFact {
    MythFact {
        myth: FALLBACK_MYTH.to_string(),
        fact: FALLBACK_FACT.to_string(),
    }
}

/// Split a myth/fact generation on its literal markers. The `Fact: ` label
/// is prefixed unconditionally, even when the model already included one.
fn parse_myth_fact(text: &str) -> Option<MythFact> {
    if !text.contains("MYTH:") {
        return None;
    }
    let (myth_part, fact_part) = text.split_once("FACT:")?;
    Some(MythFact {
        myth: myth_part.replace("MYTH:", "").trim().to_string(),
        fact: format!("Fact: {}", fact_part.trim()),
    })
}

/// Flat text block of the owner's history, one line per log, oldest first.
fn health_summary(user: &User, logs: &[SymptomLog]) -> String {
    let mut summary = format!("Health log for {} ({} years old):\n", user.name, user.age);
    for log in logs {
        summary.push_str(&format!(
            "- On {}, logged '{}' with {} severity. Notes: {}\n",
            log.log_date.format("%Y-%m-%d"),
            log.symptom_name,
            log.severity.as_deref().unwrap_or("unspecified"),
            log.notes.as_deref().unwrap_or(""),
        ));
    }
    summary
}

const MYTH_PROMPT: &str = r#"
You are CogniCare, a health awareness AI.
Your task is to generate one verifiable health "myth" and its corresponding "fact".

RULES:
1.  The "fact" must be widely accepted scientific knowledge and random.
2.  You MUST format your response with "MYTH:" and "FACT:" as separators.

Example:
MYTH: Cracking your knuckles will give you arthritis.
FACT: Fact: There is no scientific evidence to support this. The 'pop' sound is just gas bubbles bursting in your joint fluid.

Generate a new one now.
"#;

fn chat_prompt(name: &str, age: i64, message: &str) -> String {
    format!(
        r#"
You are CogniCare, a helpful and empathetic AI Public Health Chatbot.
Your user's name is {name} and they are {age} years old.
Your primary goal is to provide clear, safe, and reliable health information for disease awareness and prevention.

IMPORTANT RULES:
1. NEVER provide a diagnosis.
2. ALWAYS include this disclaimer at the end of every response: "Disclaimer: I am an AI assistant and not a medical professional. Please consult a doctor for medical advice."
3. If a question is outside the scope of health and wellness, politely decline to answer.
4. Keep your answers concise and easy to understand.

User's question: "{message}"
"#
    )
}

fn trend_prompt(health_summary: &str) -> String {
    format!(
        r#"
You are CogniCare, a health analysis AI. Your role is to analyze a user's self-reported symptom log and provide a general, non-diagnostic, and safe summary with actionable wellness tips.

IMPORTANT SAFETY RULES:
1.  YOU MUST NOT DIAGNOSE ANY CONDITION or mention specific diseases.
2.  Your PRIMARY advice for any persistent or severe symptom MUST be to consult a doctor.
3.  Frame your analysis around patterns, not diagnoses. Use phrases like "We noticed a pattern of..."
4.  You MUST include the standard disclaimer at the end of your response.

GENERAL WELLNESS ADVICE GUIDELINES:
- If you see a pattern of 'Headache' or 'Fatigue' for 2-3 consecutive days, you can suggest improving hydration (drinking more water) and ensuring adequate sleep as general wellness tips.
- If you see a pattern of 'Stomach Ache' with 'Mild' severity, you can mention the importance of a balanced diet and being mindful of trigger foods.
- If you see a pattern of 'Cough', you can suggest drinking warm liquids like tea or soup to soothe the throat.
- These suggestions are ONLY for mild, non-persistent patterns. For anything lasting longer than 3 days or marked as 'Severe', your main advice MUST be to see a doctor.

Here is the user's health summary:
---
{health_summary}
---

Based on the summary and adhering strictly to all rules and guidelines, please provide a brief, one-paragraph analysis of their health trends, incorporating relevant wellness tips if applicable.
"#
    )
}
