//! Built-in project list
//!
//! Insertion order is display order. Entries 0..9 fill the first three rows;
//! the rest continue the round-robin below them.

use super::ProjectEntry;

/// Base URL under which every repository link is formed
pub const DEFAULT_BASE_URL: &str = "https://github.com/Amonsalvem";

/// (title, repo slug, description, image)
const PROJECTS: &[(&str, &str, &str, &str)] = &[
    (
        "OCR",
        "OCR",
        "Reconocimiento óptico de caracteres. Extrae texto desde imágenes/fotos.",
        "ocr.png",
    ),
    (
        "ctrl_voice",
        "ctrl_voice",
        "Control por voz vía navegador → comandos MQTT (‘voice_alejandro’).",
        "voice.png",
    ),
    (
        "sistemas_iot",
        "sistemas_iot",
        "Panel IoT: telemetría y control con MQTT/Streamlit.",
        "iot.png",
    ),
    (
        "vision_app",
        "vision_app",
        "Análisis de imagen con modelos multimodales (gpt-4o).",
        "vision.png",
    ),
    (
        "Yolov5",
        "Yolov5",
        "Detección de objetos en tiempo real con YOLOv5.",
        "yolo.png",
    ),
    (
        "antexttt",
        "antexttt",
        "Análisis básico de texto: TF-IDF, similitud y visualizaciones.",
        "nlp.png",
    ),
    (
        "Textblobadvance",
        "Textblobadvance",
        "Sentiment + traducción (TextBlob) con front minimal.",
        "sentiment.png",
    ),
    (
        "tablero",
        "tablero",
        "‘Tablero de energías’: lienzo, color y estados emocionales.",
        "tablero.png",
    ),
    (
        "oct_16",
        "oct_16",
        "Colección de utilidades y ejemplos (experimentos).",
        "utils.png",
    ),
    (
        "historias",
        "historias",
        "Narrativas y prototipos de storytelling asistido por IA.",
        "stories.png",
    ),
    (
        "Traductor",
        "Traductor",
        "Traducción rápida (enfoque práctico).",
        "translate.png",
    ),
    (
        "textblob",
        "textblob",
        "Playground minimal con TextBlob (básico).",
        "tb.png",
    ),
    (
        "ITV",
        "ITV",
        "Prototipos varios; base para iteraciones.",
        "itv.png",
    ),
    (
        "Intro",
        "Intro",
        "Intro / boilerplate para apps.",
        "intro.png",
    ),
];

/// Build the built-in entries in display order
pub fn entries() -> Vec<ProjectEntry> {
    PROJECTS
        .iter()
        .map(|(title, slug, description, image)| {
            ProjectEntry::new(*title, *description, *slug).with_image(*image)
        })
        .collect()
}
