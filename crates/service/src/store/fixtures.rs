//! Standard seed data: 5 customers, 5 faults, 5 item types, 10 items,
//! 5 repairs and 5 resolutions, ids starting at 1.

use chrono::NaiveDate;

use crate::domain::{Customer, Fault, Item, ItemType, Repair, Resolution};

pub fn customers() -> Vec<Customer> {
    [
        ("Ada", "Lovelace", "ada@example.com", "555-0101"),
        ("Grace", "Hopper", "grace@example.com", "555-0102"),
        ("Alan", "Turing", "alan@example.com", "555-0103"),
        ("Edsger", "Dijkstra", "edsger@example.com", "555-0104"),
        ("Barbara", "Liskov", "barbara@example.com", "555-0105"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((first, last, email, phone), id)| Customer {
        id,
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
        phone: phone.into(),
    })
    .collect()
}

pub fn faults() -> Vec<Fault> {
    [
        ("No power", "Device does not turn on"),
        ("Cracked screen", "Display glass is broken"),
        ("Overheating", "Device shuts down under load"),
        ("Paper jam", "Paper stuck in the feed path"),
        ("No network", "Cannot connect to any network"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description), id)| Fault { id, name: name.into(), description: description.into() })
    .collect()
}

pub fn item_types() -> Vec<ItemType> {
    [
        ("Laptop", "XPS 13", "Dell"),
        ("Printer", "LaserJet Pro", "HP"),
        ("Phone", "Pixel 8", "Google"),
        ("Monitor", "UltraSharp 27", "Dell"),
        ("Router", "Archer AX55", "TP-Link"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, model, manufacturer), id)| ItemType {
        id,
        name: name.into(),
        model: model.into(),
        manufacturer: manufacturer.into(),
        items: None,
    })
    .collect()
}

/// Two items per item type.
pub fn items() -> Vec<Item> {
    (1..=10)
        .map(|id| Item {
            id,
            serial_number: format!("SN-{:05}", id),
            description: format!("Customer unit #{}", id),
            item_type_id: (id - 1) / 2 + 1,
            item_type: None,
        })
        .collect()
}

pub fn repairs() -> Vec<Repair> {
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or(NaiveDate::MIN);
    [
        (1, 1, 1, Some(1), "Replaced power board", day(3), Some(day(5))),
        (1, 3, 3, Some(3), "Cleaned fans and reapplied paste", day(8), Some(day(9))),
        (2, 4, 4, Some(4), "Cleared feed rollers", day(10), Some(day(10))),
        (3, 5, 2, None, "Awaiting replacement panel", day(12), None),
        (4, 9, 5, None, "Diagnosing intermittent drop-outs", day(15), None),
    ]
    .into_iter()
    .zip(1..)
    .map(|((customer_id, item_id, fault_id, resolution_id, description, started_on, completed_on), id)| Repair {
        id,
        customer_id,
        item_id: Some(item_id),
        fault_id: Some(fault_id),
        resolution_id,
        description: description.into(),
        started_on,
        completed_on,
        customer: None,
    })
    .collect()
}

pub fn resolutions() -> Vec<Resolution> {
    [
        ("Part replaced", "Faulty component swapped for a new one"),
        ("Cleaned", "Internal cleaning resolved the issue"),
        ("Firmware update", "Updated firmware to the latest release"),
        ("Adjusted", "Mechanical adjustment of moving parts"),
        ("No fault found", "Could not reproduce the reported fault"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description), id)| Resolution { id, name: name.into(), description: description.into() })
    .collect()
}
