use command_use_case::{
    create_client::{self, HasCreateClient as _},
    create_technician::{self, HasCreateTechnician as _},
    create_ticket::{self, HasCreateTicket as _},
};
use in_memory_app::InMemoryApp;
use query_use_case::{
    list_clients::{self, HasListClients as _},
    list_technicians::{self, HasListTechnicians as _},
    list_tickets::{self, HasListTickets as _},
};

const SEED_PASSWORD: &str = "123";

// (name, national id, email, profiles)
const TECHNICIANS: [(&str, &str, &str, &[&str]); 5] = [
    ("Valdir Cezar", "636.532.302.68", "valdir@mail.com", &["ADMIN"]),
    ("Richard Atallman", "903.347.070-56", "stallman@mail.com", &[]),
    ("Claude Elwood Shannonr", "271.068.470-54", "shannon@mail.com", &[]),
    ("Tim Berners-Lee", "162.720.120-39", "lee@mail.com", &[]),
    ("Linus Torvalds", "778.556.170-27", "linus@mail.com", &[]),
];

// (name, national id, email)
const CLIENTS: [(&str, &str, &str); 5] = [
    ("Albert Einstein", "111.661.890-74", "einstein@mail.com"),
    ("Marie Curie", "322.429.140-06", "curie@mail.com"),
    ("Charlie Darwin", "792.043.830-62", "darwin@mail.com"),
    ("Stephen Hawking", "177.409.680-30", "hawking@mail.com"),
    ("Max Planck", "081.399.300-83", "planck@mail.com"),
];

// (priority, status, title, observations, technician index, client index)
const TICKETS: [(&str, &str, &str, &str, usize, usize); 6] = [
    ("MEDIUM", "IN_PROGRESS", "Chamado 01", "Teste chamado 1", 0, 0),
    ("HIGH", "OPEN", "Chamado 02", "Teste chamado 2", 0, 1),
    ("LOW", "CLOSED", "Chamado 03", "Teste chamado 4", 1, 2),
    ("HIGH", "OPEN", "Chamado 04", "Teste chamado", 2, 2),
    ("MEDIUM", "IN_PROGRESS", "Chamado 05", "Teste chamado 5", 1, 0),
    ("LOW", "CLOSED", "Chamado 06", "Teste chamado 6", 0, 4),
];

pub async fn run(password_salt_len: usize) -> anyhow::Result<()> {
    let app = InMemoryApp::new(password_salt_len)?;
    seed(&app).await?;
    print(&app).await
}

async fn seed(app: &InMemoryApp) -> anyhow::Result<()> {
    let mut technician_ids = Vec::with_capacity(TECHNICIANS.len());
    for (name, national_id, email, profiles) in TECHNICIANS {
        let create_technician::Output { technician } = app
            .create_technician()
            .execute(create_technician::Input {
                email: email.to_owned(),
                name: name.to_owned(),
                national_id: national_id.to_owned(),
                password: SEED_PASSWORD.to_owned(),
                profiles: profiles.iter().map(|it| it.to_string()).collect(),
            })
            .await?;
        technician_ids.push(technician.id().to_string());
    }

    let mut client_ids = Vec::with_capacity(CLIENTS.len());
    for (name, national_id, email) in CLIENTS {
        let create_client::Output { client } = app
            .create_client()
            .execute(create_client::Input {
                email: email.to_owned(),
                name: name.to_owned(),
                national_id: national_id.to_owned(),
                password: SEED_PASSWORD.to_owned(),
                profiles: vec![],
            })
            .await?;
        client_ids.push(client.id().to_string());
    }

    for (priority, status, title, observations, technician, client) in TICKETS {
        app.create_ticket()
            .execute(create_ticket::Input {
                client_id: client_ids[client].clone(),
                observations: observations.to_owned(),
                priority: Some(priority.to_owned()),
                status: Some(status.to_owned()),
                technician_id: technician_ids[technician].clone(),
                title: title.to_owned(),
            })
            .await?;
    }

    tracing::info!(
        technicians = technician_ids.len(),
        clients = client_ids.len(),
        tickets = TICKETS.len(),
        "seeded"
    );
    Ok(())
}

async fn print(app: &InMemoryApp) -> anyhow::Result<()> {
    let list_technicians::Output(technicians) = app
        .list_technicians()
        .execute(list_technicians::Input)
        .await?;
    println!("technicians:");
    for technician in technicians {
        println!(
            "  {} {} {} {} [{}]",
            technician.id,
            technician.name,
            technician.national_id,
            technician.email,
            technician.profiles.join(",")
        );
    }

    let list_clients::Output(clients) = app.list_clients().execute(list_clients::Input).await?;
    println!("clients:");
    for client in clients {
        println!(
            "  {} {} {} {}",
            client.id, client.name, client.national_id, client.email
        );
    }

    let list_tickets::Output(tickets) = app.list_tickets().execute(list_tickets::Input).await?;
    println!("tickets:");
    for ticket in tickets {
        println!(
            "  {} {} {} {} technician={} client={} opened_at={} closed_at={}",
            ticket.id,
            ticket.title,
            ticket.priority,
            ticket.status,
            ticket.technician_name,
            ticket.client_name,
            ticket.opened_at,
            ticket.closed_at.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
