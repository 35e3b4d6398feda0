use std::sync::Arc;

use command_use_case::{
    create_client::{self, HasCreateClient as _},
    create_technician::{self, CreateTechnician, HasCreateTechnician as _},
    create_ticket::{self, HasCreateTicket as _},
    delete_client::{self, HasDeleteClient as _},
    delete_technician::{self, HasDeleteTechnician as _},
    port::{
        person_repository, technician_repository, HasPasswordHasher, HasPersonRepository,
        HasTechnicianRepository, PasswordHasher, PersonRepository, TechnicianRepository,
    },
    update_client::{self, HasUpdateClient as _},
    update_technician::{self, HasUpdateTechnician as _, UpdateTechnician},
    update_ticket::{self, HasUpdateTicket as _},
};
use in_memory_app::InMemoryApp;
use query_use_case::{
    get_client::{self, HasGetClient as _},
    get_technician::{self, HasGetTechnician as _},
    get_ticket::{self, HasGetTicket as _},
    list_technicians::{self, HasListTechnicians as _},
    list_tickets::{self, HasListTickets as _},
};
use tokio::sync::Barrier;
use write_model::{
    aggregate::{Client, Person, Technician, Ticket},
    value_object::{Email, NationalId, PersonId, Status, Version},
};

/// The app's ports with the person or technician repository swapped out.
struct Ports {
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    person_repository: Arc<dyn PersonRepository + Send + Sync>,
    technician_repository: Arc<dyn TechnicianRepository + Send + Sync>,
}

impl Ports {
    fn new(app: &InMemoryApp) -> Self {
        Self {
            password_hasher: app.password_hasher(),
            person_repository: app.person_repository(),
            technician_repository: app.technician_repository(),
        }
    }
}

impl HasPasswordHasher for Ports {
    fn password_hasher(&self) -> Arc<dyn PasswordHasher + Send + Sync> {
        self.password_hasher.clone()
    }
}

impl HasPersonRepository for Ports {
    fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync> {
        self.person_repository.clone()
    }
}

impl HasTechnicianRepository for Ports {
    fn technician_repository(&self) -> Arc<dyn TechnicianRepository + Send + Sync> {
        self.technician_repository.clone()
    }
}

impl CreateTechnician for Ports {}

impl UpdateTechnician for Ports {}

/// Holds every uniqueness check at `find_by_email` until the other caller
/// reaches it too.
struct BarrierPersonRepository {
    barrier: Barrier,
    inner: Arc<dyn PersonRepository + Send + Sync>,
}

#[async_trait::async_trait]
impl PersonRepository for BarrierPersonRepository {
    async fn delete(&self, id: PersonId) -> Result<(), person_repository::Error> {
        self.inner.delete(id).await
    }

    async fn find(&self, id: PersonId) -> Result<Option<Person>, person_repository::Error> {
        self.inner.find(id).await
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Person>, person_repository::Error> {
        let found = self.inner.find_by_email(email).await?;
        self.barrier.wait().await;
        Ok(found)
    }

    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<Person>, person_repository::Error> {
        self.inner.find_by_national_id(national_id).await
    }

    async fn next_id(&self) -> Result<PersonId, person_repository::Error> {
        self.inner.next_id().await
    }

    async fn store(&self, person: &Person) -> Result<(), person_repository::Error> {
        self.inner.store(person).await
    }
}

/// Always answers `find` with a snapshot taken before a concurrent update.
struct StaleTechnicianRepository {
    inner: Arc<dyn TechnicianRepository + Send + Sync>,
    snapshot: Technician,
}

#[async_trait::async_trait]
impl TechnicianRepository for StaleTechnicianRepository {
    async fn delete(&self, id: PersonId) -> Result<(), technician_repository::Error> {
        self.inner.delete(id).await
    }

    async fn find(
        &self,
        _: PersonId,
    ) -> Result<Option<Technician>, technician_repository::Error> {
        Ok(Some(self.snapshot.clone()))
    }

    async fn store(
        &self,
        current: Option<Version>,
        technician: &Technician,
    ) -> Result<(), technician_repository::Error> {
        self.inner.store(current, technician).await
    }
}

fn technician_input(national_id: &str, email: &str) -> create_technician::Input {
    create_technician::Input {
        email: email.to_owned(),
        name: "Valdir Cezar".to_owned(),
        national_id: national_id.to_owned(),
        password: "123".to_owned(),
        profiles: vec![],
    }
}

fn client_input(national_id: &str, email: &str) -> create_client::Input {
    create_client::Input {
        email: email.to_owned(),
        name: "Albert Einstein".to_owned(),
        national_id: national_id.to_owned(),
        password: "123".to_owned(),
        profiles: vec![],
    }
}

async fn create_technician(
    app: &InMemoryApp,
    national_id: &str,
    email: &str,
) -> anyhow::Result<Technician> {
    Ok(app
        .create_technician()
        .execute(technician_input(national_id, email))
        .await?
        .technician)
}

async fn create_client(
    app: &InMemoryApp,
    national_id: &str,
    email: &str,
) -> anyhow::Result<Client> {
    Ok(app
        .create_client()
        .execute(client_input(national_id, email))
        .await?
        .client)
}

async fn create_ticket(
    app: &InMemoryApp,
    technician: &Technician,
    client: &Client,
) -> anyhow::Result<Ticket> {
    Ok(app
        .create_ticket()
        .execute(create_ticket::Input {
            client_id: client.id().to_string(),
            observations: "Teste chamado 1".to_owned(),
            priority: Some("HIGH".to_owned()),
            status: None,
            technician_id: technician.id().to_string(),
            title: "Chamado 01".to_owned(),
        })
        .await?
        .ticket)
}

#[tokio::test]
async fn test_identity_is_unique_across_kinds() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    create_technician(&app, "111", "a@x.com").await?;

    let result = app
        .create_client()
        .execute(client_input("111", "other@x.com"))
        .await;
    assert!(matches!(
        result,
        Err(create_client::Error::NationalIdAlreadyRegistered(_))
    ));

    let result = app
        .create_client()
        .execute(client_input("222", "a@x.com"))
        .await;
    assert!(matches!(
        result,
        Err(create_client::Error::EmailAlreadyRegistered(_))
    ));

    create_client(&app, "222", "b@x.com").await?;
    let result = app
        .create_technician()
        .execute(technician_input("222", "c@x.com"))
        .await;
    assert!(matches!(
        result,
        Err(create_technician::Error::NationalIdAlreadyRegistered(_))
    ));
    let result = app
        .create_technician()
        .execute(technician_input("333", "a@x.com"))
        .await;
    assert!(matches!(
        result,
        Err(create_technician::Error::EmailAlreadyRegistered(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_get_returns_created() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    let technician = create_technician(&app, "111", "a@x.com").await?;
    let client = create_client(&app, "222", "b@x.com").await?;
    let ticket = create_ticket(&app, &technician, &client).await?;

    let get_technician::Output { technician: view } = app
        .get_technician()
        .execute(get_technician::Input {
            technician_id: technician.id().to_string(),
        })
        .await?;
    assert_eq!(view.id, technician.id().to_string());
    assert_eq!(view.name, technician.person().name().to_string());
    assert_eq!(view.national_id, "111");
    assert_eq!(view.email, "a@x.com");
    assert_eq!(view.created_at, technician.person().created_at().to_string());
    assert_eq!(view.profiles, vec!["TECHNICIAN"]);

    let get_client::Output { client: view } = app
        .get_client()
        .execute(get_client::Input {
            client_id: client.id().to_string(),
        })
        .await?;
    assert_eq!(view.id, client.id().to_string());
    assert_eq!(view.profiles, vec!["CLIENT"]);

    let get_ticket::Output { ticket: view } = app
        .get_ticket()
        .execute(get_ticket::Input {
            ticket_id: ticket.id().to_string(),
        })
        .await?;
    assert_eq!(view.id, ticket.id().to_string());
    assert_eq!(view.technician_id, technician.id().to_string());
    assert_eq!(view.client_id, client.id().to_string());
    assert_eq!(view.technician_name, "Valdir Cezar");
    assert_eq!(view.client_name, "Albert Einstein");
    assert_eq!(view.opened_at, ticket.opened_at().to_string());
    Ok(())
}

#[tokio::test]
async fn test_ticket_lifecycle() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    let technician = create_technician(&app, "111", "a@x.com").await?;
    let client = create_client(&app, "222", "b@x.com").await?;

    let ticket = create_ticket(&app, &technician, &client).await?;
    assert_eq!(ticket.status(), Status::Open);
    assert!(ticket.closed_at().is_none());

    let result = app
        .delete_technician()
        .execute(delete_technician::Input {
            technician_id: technician.id().to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(delete_technician::Error::TechnicianHasTickets(_, 1))
    ));
    let result = app
        .delete_client()
        .execute(delete_client::Input {
            client_id: client.id().to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(delete_client::Error::ClientHasTickets(_, 1))
    ));
    app.get_technician()
        .execute(get_technician::Input {
            technician_id: technician.id().to_string(),
        })
        .await?;
    app.get_client()
        .execute(get_client::Input {
            client_id: client.id().to_string(),
        })
        .await?;

    let update_ticket::Output { ticket: closed } = app
        .update_ticket()
        .execute(update_ticket::Input {
            client_id: None,
            observations: None,
            priority: None,
            status: Some("CLOSED".to_owned()),
            technician_id: None,
            ticket_id: ticket.id().to_string(),
            title: None,
        })
        .await?;
    let closed_at = closed
        .closed_at()
        .ok_or_else(|| anyhow::anyhow!("closed_at is not set"))?;
    assert!(closed_at >= closed.opened_at());

    let get_ticket::Output { ticket: view } = app
        .get_ticket()
        .execute(get_ticket::Input {
            ticket_id: ticket.id().to_string(),
        })
        .await?;
    assert_eq!(view.status, "CLOSED");
    assert_eq!(view.closed_at, Some(closed_at.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_delete_without_tickets() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    let technician = create_technician(&app, "111", "a@x.com").await?;
    let client = create_client(&app, "222", "b@x.com").await?;

    app.delete_technician()
        .execute(delete_technician::Input {
            technician_id: technician.id().to_string(),
        })
        .await?;
    let result = app
        .get_technician()
        .execute(get_technician::Input {
            technician_id: technician.id().to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(get_technician::Error::TechnicianNotFound(_))
    ));
    let result = app
        .delete_technician()
        .execute(delete_technician::Input {
            technician_id: technician.id().to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(delete_technician::Error::TechnicianNotFound(_))
    ));

    app.delete_client()
        .execute(delete_client::Input {
            client_id: client.id().to_string(),
        })
        .await?;
    let result = app
        .get_client()
        .execute(get_client::Input {
            client_id: client.id().to_string(),
        })
        .await;
    assert!(matches!(result, Err(get_client::Error::ClientNotFound(_))));

    // the identity is free again
    create_client(&app, "111", "a@x.com").await?;
    Ok(())
}

#[tokio::test]
async fn test_ticket_requires_existing_parties() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    let technician = create_technician(&app, "111", "a@x.com").await?;
    let client = create_client(&app, "222", "b@x.com").await?;

    let result = app
        .create_ticket()
        .execute(create_ticket::Input {
            client_id: client.id().to_string(),
            observations: String::new(),
            priority: None,
            status: None,
            technician_id: "99".to_owned(),
            title: "Chamado".to_owned(),
        })
        .await;
    assert!(matches!(
        result,
        Err(create_ticket::Error::TechnicianNotFound(_))
    ));

    // a client id is not a technician id
    let result = app
        .create_ticket()
        .execute(create_ticket::Input {
            client_id: technician.id().to_string(),
            observations: String::new(),
            priority: None,
            status: None,
            technician_id: technician.id().to_string(),
            title: "Chamado".to_owned(),
        })
        .await;
    assert!(matches!(
        result,
        Err(create_ticket::Error::ClientNotFound(_))
    ));

    let list_tickets::Output(tickets) = app.list_tickets().execute(list_tickets::Input).await?;
    assert!(tickets.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_update_identity() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    let technician = create_technician(&app, "111", "a@x.com").await?;
    create_client(&app, "222", "b@x.com").await?;

    let update_technician::Output { technician: updated } = app
        .update_technician()
        .execute(update_technician::Input {
            email: "a@x.com".to_owned(),
            name: "Richard Stallman".to_owned(),
            national_id: "111".to_owned(),
            password: None,
            profiles: None,
            technician_id: technician.id().to_string(),
        })
        .await?;
    assert_eq!(updated.person().name().as_str(), "Richard Stallman");
    assert_eq!(
        updated.person().password_digest(),
        technician.person().password_digest()
    );
    assert!(app.verify_password("123", updated.person().password_digest()));

    let result = app
        .update_technician()
        .execute(update_technician::Input {
            email: "b@x.com".to_owned(),
            name: "Richard Stallman".to_owned(),
            national_id: "111".to_owned(),
            password: None,
            profiles: None,
            technician_id: technician.id().to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(update_technician::Error::EmailAlreadyRegistered(_))
    ));

    let update_technician::Output { technician: updated } = app
        .update_technician()
        .execute(update_technician::Input {
            email: "new@x.com".to_owned(),
            name: "Richard Stallman".to_owned(),
            national_id: "111".to_owned(),
            password: Some("secret".to_owned()),
            profiles: Some(vec!["ADMIN".to_owned()]),
            technician_id: technician.id().to_string(),
        })
        .await?;
    assert!(app.verify_password("secret", updated.person().password_digest()));
    assert!(!app.verify_password("123", updated.person().password_digest()));

    // the old email is released
    let result = app
        .create_client()
        .execute(client_input("333", "a@x.com"))
        .await;
    assert!(result.is_ok());

    let list_technicians::Output(technicians) = app
        .list_technicians()
        .execute(list_technicians::Input)
        .await?;
    assert_eq!(technicians.len(), 1);
    assert_eq!(technicians[0].email, "new@x.com");
    assert_eq!(technicians[0].profiles, vec!["ADMIN", "TECHNICIAN"]);
    Ok(())
}

#[tokio::test]
async fn test_update_client_keeps_password() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    let client = create_client(&app, "222", "b@x.com").await?;

    let update_client::Output { client: updated } = app
        .update_client()
        .execute(update_client::Input {
            client_id: client.id().to_string(),
            email: "b@x.com".to_owned(),
            name: "Marie Curie".to_owned(),
            national_id: "222".to_owned(),
            password: Some(String::new()),
            profiles: None,
        })
        .await?;
    assert_eq!(
        updated.person().password_digest(),
        client.person().password_digest()
    );
    assert_eq!(updated.version(), client.version().next()?);
    Ok(())
}

#[tokio::test]
async fn test_email_is_case_insensitive() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    let technician = create_technician(&app, "111", "Linus@Mail.com").await?;
    assert_eq!(technician.person().email().as_str(), "linus@mail.com");

    let result = app
        .create_client()
        .execute(client_input("222", "linus@MAIL.COM"))
        .await;
    assert!(matches!(
        result,
        Err(create_client::Error::EmailAlreadyRegistered(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_stale_update_changes_neither_record() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    let snapshot = create_technician(&app, "111", "a@x.com").await?;

    app.update_technician()
        .execute(update_technician::Input {
            email: "winner@x.com".to_owned(),
            name: "Valdir Cezar".to_owned(),
            national_id: "111".to_owned(),
            password: None,
            profiles: None,
            technician_id: snapshot.id().to_string(),
        })
        .await?;

    let technician_id = snapshot.id().to_string();
    let ports = Ports {
        technician_repository: Arc::new(StaleTechnicianRepository {
            inner: app.technician_repository(),
            snapshot,
        }),
        ..Ports::new(&app)
    };
    let result = UpdateTechnician::execute(
        &ports,
        update_technician::Input {
            email: "loser@x.com".to_owned(),
            name: "Valdir Cezar".to_owned(),
            national_id: "111".to_owned(),
            password: None,
            profiles: None,
            technician_id: technician_id.clone(),
        },
    )
    .await;
    assert!(matches!(
        result,
        Err(update_technician::Error::TechnicianStore(_))
    ));

    let get_technician::Output { technician: view } = app
        .get_technician()
        .execute(get_technician::Input { technician_id })
        .await?;
    assert_eq!(view.email, "winner@x.com");

    // the rejected email never entered the identity namespace
    create_client(&app, "222", "loser@x.com").await?;
    let result = app
        .create_client()
        .execute(client_input("333", "winner@x.com"))
        .await;
    assert!(matches!(
        result,
        Err(create_client::Error::EmailAlreadyRegistered(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_interleaved_creates_both_pass_uniqueness_check() -> anyhow::Result<()> {
    let app = InMemoryApp::new(16)?;
    let ports = Ports {
        person_repository: Arc::new(BarrierPersonRepository {
            barrier: Barrier::new(2),
            inner: app.person_repository(),
        }),
        ..Ports::new(&app)
    };

    // both checks finish before either insert, so the duplicate gets through
    let (first, second) = tokio::join!(
        CreateTechnician::execute(&ports, technician_input("111", "a@x.com")),
        CreateTechnician::execute(&ports, technician_input("111", "b@x.com")),
    );
    let first = first?.technician;
    let second = second?.technician;
    assert_ne!(first.id(), second.id());

    let list_technicians::Output(technicians) = app
        .list_technicians()
        .execute(list_technicians::Input)
        .await?;
    assert_eq!(technicians.len(), 2);
    assert!(technicians.iter().all(|it| it.national_id == "111"));

    // a sequential create still sees the taken national id
    let result = app
        .create_technician()
        .execute(technician_input("111", "c@x.com"))
        .await;
    assert!(matches!(
        result,
        Err(create_technician::Error::NationalIdAlreadyRegistered(_))
    ));
    Ok(())
}
