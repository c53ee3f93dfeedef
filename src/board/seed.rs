//! Seed data for first-run collections.
//!
//! These are the demo records the board starts with before anyone has
//! posted; they are supplied as call-site defaults, the store itself knows
//! nothing about them.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::{Announcement, Category, Contact, Event, Posting, Priority};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn day(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap_or_default()
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "1".to_string(),
            title: "Community Guidelines Updated".to_string(),
            content: "We have updated our community guidelines to ensure a safe and pleasant \
                      environment for all residents. Please review the new policies regarding \
                      noise levels, parking, and common area usage."
                .to_string(),
            author: "Community Admin".to_string(),
            created_at: ts(2024, 1, 15, 10, 0),
            priority: Priority::High,
        },
        Announcement {
            id: "2".to_string(),
            title: "Maintenance Schedule - Water Supply".to_string(),
            content: "Scheduled water supply maintenance on January 20th from 9 AM to 3 PM. \
                      Please store water in advance for your daily needs."
                .to_string(),
            author: "Maintenance Team".to_string(),
            created_at: ts(2024, 1, 14, 14, 30),
            priority: Priority::Medium,
        },
        Announcement {
            id: "3".to_string(),
            title: "New Recycling Program".to_string(),
            content: "We are implementing a new recycling program starting February 1st. \
                      Separate collection bins will be placed in each building. Guidelines for \
                      waste segregation are attached."
                .to_string(),
            author: "Environmental Committee".to_string(),
            created_at: ts(2024, 1, 13, 9, 15),
            priority: Priority::Low,
        },
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Monthly Community Meeting".to_string(),
            description: "Join us for our monthly community discussion. We will cover budget \
                          updates, upcoming projects, and address resident concerns."
                .to_string(),
            date: day(2024, 1, 25),
            time: "19:00".to_string(),
            location: "Community Hall".to_string(),
            organizer: "Community Board".to_string(),
            created_at: ts(2024, 1, 10, 9, 0),
        },
        Event {
            id: "2".to_string(),
            title: "Children's Art Workshop".to_string(),
            description: "Creative art workshop for children aged 5-12. Materials provided. \
                          Parents welcome to stay and watch."
                .to_string(),
            date: day(2024, 1, 28),
            time: "15:00".to_string(),
            location: "Community Club".to_string(),
            organizer: "Mishthi".to_string(),
            created_at: ts(2024, 1, 12, 10, 30),
        },
        Event {
            id: "3".to_string(),
            title: "Community Cleanup Drive".to_string(),
            description: "Help us keep our community beautiful! Volunteers needed for our \
                          quarterly cleanup. Gloves and supplies provided."
                .to_string(),
            date: day(2024, 2, 3),
            time: "09:00".to_string(),
            location: "Main Entrance".to_string(),
            organizer: "Environmental Committee".to_string(),
            created_at: ts(2024, 1, 8, 11, 15),
        },
    ]
}

pub fn postings() -> Vec<Posting> {
    vec![
        Posting {
            id: "1".to_string(),
            title: "Bike - Excellent Condition".to_string(),
            description: "Selling my bike as I'm moving to a new city. Great for trails and \
                          city riding. Well maintained with recent tune-up."
                .to_string(),
            category: Category::Sell,
            price: Some("Rs.35000".to_string()),
            contact: "amit1990@gmail.com".to_string(),
            author: "Amit Tiwari".to_string(),
            created_at: ts(2025, 1, 14, 12, 0),
        },
        Posting {
            id: "2".to_string(),
            title: "Looking for Study Table".to_string(),
            description: "Need a sturdy study table for my home office. Preferably with \
                          drawers. Good condition required."
                .to_string(),
            category: Category::Buy,
            price: None,
            contact: "9589874521".to_string(),
            author: "Vinayak".to_string(),
            created_at: ts(2024, 1, 13, 15, 30),
        },
        Posting {
            id: "3".to_string(),
            title: "2BHK Apartment Available".to_string(),
            description: "Spacious 2-bedroom apartment available for rent. Includes parking \
                          spot and access to community amenities."
                .to_string(),
            category: Category::Rent,
            price: Some("Rs.12000/month".to_string()),
            contact: "Krishna123@gmail.com".to_string(),
            author: "Property Manager".to_string(),
            created_at: ts(2024, 1, 12, 9, 15),
        },
    ]
}

pub fn contacts() -> Vec<Contact> {
    Vec::new()
}
