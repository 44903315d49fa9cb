use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::crypto;

/// Presumed agreement with a (not yet existing) remote copy of a note
///
/// Only the transition into `Pending` is reachable locally; the other states
/// are entered by a future sync collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// Local state matches the remote counterpart
    Synced,
    /// Local changes not yet pushed
    Pending,
    /// Local and remote copies disagree
    Conflict,
    /// No connectivity to the remote
    Offline,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub is_encrypted: bool,
    pub last_modified: DateTime<Utc>,
    pub category: String,
    pub tags: Vec<String>,
    pub sync_status: SyncStatus,
}

/// Sample notes seeded into a fresh store
///
/// One plaintext note awaiting sync and two confidential notes sealed with
/// the given passphrase. The ciphertexts are minted at startup; a fresh salt
/// and nonce per encryption means there is no stable blob to hard-code.
pub fn sample_notes(passphrase: &str) -> crypto::Result<Vec<Note>> {
    let strategy = crypto::encrypt(
        "Objetivos Q1: consolidar el equipo, cerrar la migración y preparar \
         la revisión presupuestaria de marzo.",
        passphrase,
    )?;

    let competition = crypto::encrypt(
        "Resumen del análisis de mercado: dos competidores directos, ambos \
         sin oferta en el segmento medio.",
        passphrase,
    )?;

    Ok(vec![
        Note {
            id: Uuid::new_v4(),
            title: String::from("Estrategia confidencial Q1"),
            content: strategy,
            is_encrypted: true,
            last_modified: sample_timestamp(2024, 1, 20, 10, 30),
            category: String::from("Estrategia"),
            tags: vec![
                String::from("confidencial"),
                String::from("q1"),
                String::from("planificación"),
            ],
            sync_status: SyncStatus::Synced,
        },
        Note {
            id: Uuid::new_v4(),
            title: String::from("Feedback del equipo"),
            content: String::from(
                "Notas de las reuniones 1:1 con el equipo. Juan mostró \
                 preocupación por la carga de trabajo...",
            ),
            is_encrypted: false,
            last_modified: sample_timestamp(2024, 1, 22, 15, 45),
            category: String::from("Equipo"),
            tags: vec![
                String::from("feedback"),
                String::from("1:1"),
                String::from("seguimiento"),
            ],
            sync_status: SyncStatus::Pending,
        },
        Note {
            id: Uuid::new_v4(),
            title: String::from("Análisis de competencia"),
            content: competition,
            is_encrypted: true,
            last_modified: sample_timestamp(2024, 1, 18, 9, 15),
            category: String::from("Investigación"),
            tags: vec![
                String::from("competencia"),
                String::from("análisis"),
                String::from("mercado"),
            ],
            sync_status: SyncStatus::Offline,
        },
    ])
}

fn sample_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("Valid sample timestamp")
}
