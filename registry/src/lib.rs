use std::sync::Arc;

use adapter::mailer::{gmail::GmailMailer, in_memory::InMemoryMailer};
use adapter::repository::participation::InMemoryParticipationRepository;
use adapter::repository::user::InMemoryUserRepository;
use adapter::repository::webinar::InMemoryWebinarRepository;
use kernel::mailer::Mailer;
use kernel::repository::participation::ParticipationRepository;
use kernel::repository::user::UserRepository;
use kernel::repository::webinar::WebinarRepository;
use kernel::usecase::book_seat::BookSeat;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    user_repository: Arc<dyn UserRepository>,
    webinar_repository: Arc<dyn WebinarRepository>,
    participation_repository: Arc<dyn ParticipationRepository>,
    mailer: Arc<dyn Mailer>,
    book_seat: Arc<BookSeat>,
}

impl AppRegistry {
    pub fn new(app_config: AppConfig) -> Self {
        let user_repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::default());
        let webinar_repository: Arc<dyn WebinarRepository> =
            Arc::new(InMemoryWebinarRepository::default());
        let participation_repository: Arc<dyn ParticipationRepository> =
            Arc::new(InMemoryParticipationRepository::default());
        // アクセストークンが設定されていれば Gmail、なければ記録のみのメーラー
        let mailer: Arc<dyn Mailer> = match app_config.mail {
            Some(mail_config) => Arc::new(GmailMailer::new(
                reqwest::Client::new(),
                mail_config.access_token,
            )),
            None => Arc::new(InMemoryMailer::new()),
        };
        let book_seat = Arc::new(BookSeat::new(
            participation_repository.clone(),
            user_repository.clone(),
            webinar_repository.clone(),
            mailer.clone(),
        ));
        Self {
            user_repository,
            webinar_repository,
            participation_repository,
            mailer,
            book_seat,
        }
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn webinar_repository(&self) -> Arc<dyn WebinarRepository> {
        self.webinar_repository.clone()
    }

    pub fn participation_repository(&self) -> Arc<dyn ParticipationRepository> {
        self.participation_repository.clone()
    }

    pub fn mailer(&self) -> Arc<dyn Mailer> {
        self.mailer.clone()
    }

    pub fn book_seat(&self) -> Arc<BookSeat> {
        self.book_seat.clone()
    }
}
