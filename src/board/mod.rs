//! Community board facade over the persistent collection store.
//!
//! Each page-level collection (announcements, events, postings, contacts)
//! lives under its own key. Reads seed the collection with demo data on
//! first access; creates validate input, stamp a fresh id and timestamp,
//! and prepend so collections stay newest-first.

pub mod seed;

use std::sync::Arc;

use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{
    Announcement, Contact, Event, NewAnnouncement, NewContact, NewEvent, NewPosting, Posting,
};
use crate::session::SESSION_KEY;
use crate::storage::FileStorage;
use crate::store::CollectionStore;
use crate::views;

/// Storage keys, one per collection.
pub mod keys {
    pub const ANNOUNCEMENTS: &str = "announcements";
    pub const EVENTS: &str = "events";
    pub const POSTINGS: &str = "postings";
    pub const CONTACTS: &str = "contacts";
}

/// Department name used for the emergency-contact tally.
pub const EMERGENCY_DEPARTMENT: &str = "emergency";

/// Admin dashboard statistics.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub announcements: usize,
    pub events: usize,
    pub postings: usize,
    pub contacts: usize,
    pub high_priority_announcements: usize,
    pub upcoming_events: usize,
    pub sell_postings: usize,
    pub emergency_contacts: usize,
}

/// The community board: one collection per key, all persisted through the
/// collection store.
pub struct CommunityBoard {
    store: CollectionStore,
    clock: Arc<dyn Clock>,
}

impl CommunityBoard {
    pub fn new(store: CollectionStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Open a board over file-backed storage at the configured data
    /// directory, using the system clock.
    pub fn open(config: &Config) -> Result<Self, AppError> {
        let storage = FileStorage::open(&config.data_dir)?;
        Ok(Self::new(
            CollectionStore::new(Arc::new(storage)),
            Arc::new(SystemClock),
        ))
    }

    /// The underlying collection store, shared with the session store.
    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    // ==================== COLLECTION READS ====================

    pub fn announcements(&self) -> Result<Vec<Announcement>, AppError> {
        self.store.get(keys::ANNOUNCEMENTS, seed::announcements())
    }

    pub fn events(&self) -> Result<Vec<Event>, AppError> {
        self.store.get(keys::EVENTS, seed::events())
    }

    pub fn postings(&self) -> Result<Vec<Posting>, AppError> {
        self.store.get(keys::POSTINGS, seed::postings())
    }

    pub fn contacts(&self) -> Result<Vec<Contact>, AppError> {
        self.store.get(keys::CONTACTS, seed::contacts())
    }

    // ==================== CREATE OPERATIONS ====================

    /// Post a new announcement, attributed to `author`.
    pub fn post_announcement(
        &self,
        request: NewAnnouncement,
        author: &str,
    ) -> Result<Announcement, AppError> {
        require(&request.title, "title")?;
        require(&request.content, "content")?;

        let announcement = Announcement {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title,
            content: request.content,
            author: author.to_string(),
            created_at: self.clock.now(),
            priority: request.priority,
        };

        let mut all = self.announcements()?;
        all.insert(0, announcement.clone());
        self.store.set(keys::ANNOUNCEMENTS, &all)?;
        Ok(announcement)
    }

    /// Add a new event, organized by `organizer`.
    pub fn add_event(&self, request: NewEvent, organizer: &str) -> Result<Event, AppError> {
        require(&request.title, "title")?;
        require(&request.description, "description")?;
        require(&request.time, "time")?;
        require(&request.location, "location")?;

        let event = Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            date: request.date,
            time: request.time,
            location: request.location,
            organizer: organizer.to_string(),
            created_at: self.clock.now(),
        };

        let mut all = self.events()?;
        all.insert(0, event.clone());
        self.store.set(keys::EVENTS, &all)?;
        Ok(event)
    }

    /// Add a new marketplace posting, attributed to `author`.
    pub fn add_posting(&self, request: NewPosting, author: &str) -> Result<Posting, AppError> {
        require(&request.title, "title")?;
        require(&request.description, "description")?;
        require(&request.contact, "contact")?;

        let posting = Posting {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            category: request.category,
            price: request.price.filter(|p| !p.trim().is_empty()),
            contact: request.contact,
            author: author.to_string(),
            created_at: self.clock.now(),
        };

        let mut all = self.postings()?;
        all.insert(0, posting.clone());
        self.store.set(keys::POSTINGS, &all)?;
        Ok(posting)
    }

    /// Add a new important contact.
    pub fn add_contact(&self, request: NewContact) -> Result<Contact, AppError> {
        require(&request.name, "name")?;
        require(&request.role, "role")?;
        require(&request.phone, "phone")?;
        require(&request.department, "department")?;

        let contact = Contact {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            role: request.role,
            phone: request.phone,
            email: request.email.filter(|e| !e.trim().is_empty()),
            department: request.department,
            availability: request.availability.filter(|a| !a.trim().is_empty()),
        };

        let mut all = self.contacts()?;
        all.insert(0, contact.clone());
        self.store.set(keys::CONTACTS, &all)?;
        Ok(contact)
    }

    // ==================== ADMIN SURFACE ====================

    /// Dashboard tallies across all collections.
    pub fn stats(&self) -> Result<BoardStats, AppError> {
        let announcements = self.announcements()?;
        let events = self.events()?;
        let postings = self.postings()?;
        let contacts = self.contacts()?;
        let today = self.clock.today();

        Ok(BoardStats {
            announcements: announcements.len(),
            events: events.len(),
            postings: postings.len(),
            contacts: contacts.len(),
            high_priority_announcements: views::count_by_priority(
                &announcements,
                crate::models::Priority::High,
            ),
            upcoming_events: views::count_upcoming(&events, today),
            sell_postings: views::category_counts(&postings).sell,
            emergency_contacts: views::count_by_department(&contacts, EMERGENCY_DEPARTMENT),
        })
    }

    /// The merged recent-activity feed for the admin dashboard.
    pub fn recent_activity(&self) -> Result<Vec<views::ActivityItem>, AppError> {
        Ok(views::recent_activity(
            &self.announcements()?,
            &self.events()?,
            &self.postings()?,
        ))
    }

    /// Clear every collection and the persisted session.
    ///
    /// Irreversible; callers are expected to confirm with the user first.
    /// Best-effort across keys: a failed clear does not stop the remaining
    /// keys from being cleared, but the failure is reported rather than
    /// swallowed.
    pub fn clear_all_data(&self) -> Result<(), AppError> {
        let all_keys = [
            keys::ANNOUNCEMENTS,
            keys::EVENTS,
            keys::POSTINGS,
            keys::CONTACTS,
            SESSION_KEY,
        ];

        let mut failed = Vec::new();
        for key in all_keys {
            if let Err(err) = self.store.remove(key) {
                tracing::error!(key, "Failed to clear key: {}", err);
                failed.push(key);
            }
        }

        if failed.is_empty() {
            tracing::info!("Cleared all community data");
            Ok(())
        } else {
            Err(AppError::Storage(format!(
                "Failed to clear keys: {}",
                failed.join(", ")
            )))
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
