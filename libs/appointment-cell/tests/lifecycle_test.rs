//! Lifecycle integration test against a real MySQL instance.
//!
//! Runs only when TEST_DATABASE_URL is set; otherwise the test is skipped so
//! the suite stays green on machines without a database.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use sqlx::MySqlPool;

use appointment_cell::models::{AppointmentStatus, NewAgendamento};
use appointment_cell::services::lifecycle::AppointmentLifecycleService;
use shared_config::AppConfig;
use shared_database::{schema, AppState};
use shared_models::error::AppError;

async fn test_state() -> Option<Arc<AppState>> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping lifecycle integration test");
        return None;
    };

    let config = AppConfig {
        database_url: database_url.clone(),
        jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
        port: 3000,
        db_max_connections: 2,
    };

    let db = MySqlPool::connect(&database_url)
        .await
        .expect("connect to TEST_DATABASE_URL");
    schema::bootstrap(&db).await.expect("bootstrap schema");

    Some(Arc::new(AppState { config, db }))
}

async fn insert_fixture(db: &MySqlPool) -> (i64, i64, i64) {
    let paciente = sqlx::query("INSERT INTO Pacientes (nome, telefone) VALUES (?, ?)")
        .bind("Paciente Teste")
        .bind("(11) 90000-0000")
        .execute(db)
        .await
        .unwrap()
        .last_insert_id() as i64;

    let profissional =
        sqlx::query("INSERT INTO Profissionais (nome, especialidade) VALUES (?, ?)")
            .bind("Dra. Teste")
            .bind("Fisioterapia")
            .execute(db)
            .await
            .unwrap()
            .last_insert_id() as i64;

    let servico = sqlx::query("INSERT INTO Servicos (nome, duracao, preco) VALUES (?, ?, ?)")
        .bind("Sessão de Fisioterapia")
        .bind(50)
        .bind(120.0)
        .execute(db)
        .await
        .unwrap()
        .last_insert_id() as i64;

    (paciente, profissional, servico)
}

async fn slot_of(db: &MySqlPool, agendamento_id: i64) -> (i64, bool) {
    sqlx::query_as::<_, (i64, bool)>(
        "SELECT h.id, h.disponivel FROM Agendamentos a \
         JOIN HorariosDisponiveis h ON a.horario_id = h.id WHERE a.id = ?",
    )
    .bind(agendamento_id)
    .fetch_one(db)
    .await
    .unwrap()
}

async fn count(db: &MySqlPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(db)
        .await
        .unwrap()
}

fn booking(paciente: i64, profissional: i64, servico: i64) -> NewAgendamento {
    NewAgendamento {
        paciente_id: paciente,
        profissional_id: profissional,
        servico_id: servico,
        data: NaiveDate::from_ymd_opt(2031, 6, 1).unwrap(),
        hora: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        observacoes: None,
    }
}

#[tokio::test]
async fn booking_and_cancellation_keep_slot_consistent() {
    let Some(state) = test_state().await else {
        return;
    };
    let db = state.db.clone();
    let service = AppointmentLifecycleService::new(state.clone());

    let (paciente, profissional, servico) = insert_fixture(&db).await;

    let appointments_before = count(&db, "Agendamentos").await;
    let slots_before = count(&db, "HorariosDisponiveis").await;

    // Create: one new slot row, one new appointment row, slot taken.
    let view = service
        .create(booking(paciente, profissional, servico))
        .await
        .unwrap();

    assert_eq!(view.status, "agendado");
    assert_eq!(view.nome_paciente.as_deref(), Some("Paciente Teste"));
    assert_eq!(view.nome_profissional.as_deref(), Some("Dra. Teste"));
    assert_eq!(view.nome_servico.as_deref(), Some("Sessão de Fisioterapia"));
    assert_eq!(view.data_hora.as_deref(), Some("2031-06-01 10:00"));

    assert_eq!(count(&db, "Agendamentos").await, appointments_before + 1);
    assert_eq!(count(&db, "HorariosDisponiveis").await, slots_before + 1);

    let (_, disponivel) = slot_of(&db, view.id).await;
    assert!(!disponivel, "slot must be taken while the booking is live");

    // Cancel: status flips, slot released.
    let cancelled = service
        .update_status(view.id, AppointmentStatus::Cancelado, None)
        .await
        .unwrap();
    assert_eq!(cancelled.status, "cancelado");

    let (_, disponivel) = slot_of(&db, view.id).await;
    assert!(disponivel, "slot must be released after cancellation");

    // Terminal guard: no way out of cancelado.
    let err = service
        .update_status(view.id, AppointmentStatus::Concluido, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Second cancel is a no-op on the slot flag.
    service.cancel(view.id).await.unwrap();
    let (_, disponivel) = slot_of(&db, view.id).await;
    assert!(disponivel);
}

#[tokio::test]
async fn delete_style_cancel_releases_slot() {
    let Some(state) = test_state().await else {
        return;
    };
    let db = state.db.clone();
    let service = AppointmentLifecycleService::new(state.clone());

    let (paciente, profissional, servico) = insert_fixture(&db).await;
    let view = service
        .create(booking(paciente, profissional, servico))
        .await
        .unwrap();

    service.cancel(view.id).await.unwrap();

    let (_, disponivel) = slot_of(&db, view.id).await;
    assert!(disponivel);

    let status: String = sqlx::query_scalar("SELECT status FROM Agendamentos WHERE id = ?")
        .bind(view.id)
        .fetch_one(&db)
        .await
        .unwrap();
    assert_eq!(status, "cancelado");
}

#[tokio::test]
async fn cancel_of_unknown_appointment_is_not_found() {
    let Some(state) = test_state().await else {
        return;
    };
    let service = AppointmentLifecycleService::new(state);

    let err = service.cancel(i64::MAX).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn patient_listing_uses_ascending_order() {
    let Some(state) = test_state().await else {
        return;
    };
    let db = state.db.clone();
    let service = AppointmentLifecycleService::new(state.clone());

    let (paciente, profissional, servico) = insert_fixture(&db).await;

    for (d, h) in [(3, 9), (1, 14), (2, 8)] {
        let mut novo = booking(paciente, profissional, servico);
        novo.data = NaiveDate::from_ymd_opt(2031, 7, d).unwrap();
        novo.hora = NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        service.create(novo).await.unwrap();
    }

    let listed = service.list_by_patient(paciente).await.unwrap();
    assert_eq!(listed.len(), 3);

    let dates: Vec<_> = listed.iter().map(|v| v.data.clone().unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted, "per-patient listing must be ascending");
}
