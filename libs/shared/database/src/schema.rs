use anyhow::Result;
use sqlx::MySqlPool;
use tracing::info;

/// Idempotent table bootstrap, run once at startup. Mirrors the original
/// deployment model: the application creates missing tables instead of
/// shipping a migration tool.
///
/// Note the deliberate absence of a uniqueness constraint on
/// (profissional_id, data, hora): two bookings for the same professional,
/// date and time produce two slot rows. Documented current behavior.
const TABLES: [&str; 6] = [
    r#"
    CREATE TABLE IF NOT EXISTS Pacientes (
        id INT AUTO_INCREMENT PRIMARY KEY,
        nome VARCHAR(100) NOT NULL,
        telefone VARCHAR(20),
        email VARCHAR(100) UNIQUE,
        senha VARCHAR(255),
        historico TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Profissionais (
        id INT AUTO_INCREMENT PRIMARY KEY,
        nome VARCHAR(100) NOT NULL,
        especialidade VARCHAR(100) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Servicos (
        id INT AUTO_INCREMENT PRIMARY KEY,
        nome VARCHAR(100) NOT NULL,
        duracao INT NOT NULL,
        preco DOUBLE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS HorariosDisponiveis (
        id INT AUTO_INCREMENT PRIMARY KEY,
        data DATE NOT NULL,
        hora TIME NOT NULL,
        profissional_id INT,
        disponivel BOOLEAN NOT NULL DEFAULT TRUE,
        FOREIGN KEY (profissional_id) REFERENCES Profissionais(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Agendamentos (
        id INT AUTO_INCREMENT PRIMARY KEY,
        paciente_id INT,
        profissional_id INT,
        servico_id INT,
        horario_id INT,
        status ENUM('agendado', 'concluido', 'cancelado') NOT NULL DEFAULT 'agendado',
        observacoes TEXT,
        criado_em TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (paciente_id) REFERENCES Pacientes(id),
        FOREIGN KEY (profissional_id) REFERENCES Profissionais(id),
        FOREIGN KEY (servico_id) REFERENCES Servicos(id),
        FOREIGN KEY (horario_id) REFERENCES HorariosDisponiveis(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Administradores (
        id INT AUTO_INCREMENT PRIMARY KEY,
        nome VARCHAR(100),
        email VARCHAR(100) NOT NULL UNIQUE,
        senha VARCHAR(255) NOT NULL
    )
    "#,
];

pub async fn bootstrap(pool: &MySqlPool) -> Result<()> {
    for statement in TABLES {
        sqlx::query(statement).execute(pool).await?;
    }

    seed_sample_patients(pool).await?;

    info!("Database schema verified");
    Ok(())
}

/// Same sample rows the original server inserted when it created the patient
/// table for the first time.
async fn seed_sample_patients(pool: &MySqlPool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Pacientes")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    let samples = [
        (
            "João Silva",
            "(11) 99999-9999",
            "joao@email.com",
            "Paciente com dor lombar",
        ),
        (
            "Maria Santos",
            "(11) 98888-8888",
            "maria@email.com",
            "Paciente com lesão no ombro",
        ),
        (
            "Pedro Oliveira",
            "(11) 97777-7777",
            "pedro@email.com",
            "Paciente em recuperação pós-cirúrgica",
        ),
    ];

    for (nome, telefone, email, historico) in samples {
        sqlx::query(
            "INSERT INTO Pacientes (nome, telefone, email, historico) VALUES (?, ?, ?, ?)",
        )
        .bind(nome)
        .bind(telefone)
        .bind(email)
        .bind(historico)
        .execute(pool)
        .await?;
    }

    info!("Sample patients inserted");
    Ok(())
}
