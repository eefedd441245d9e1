//! Read-only queries over a projected snapshot sequence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cashflow_domain::{DailyEvent, DailySnapshot};

/// First day, in sequence order, whose closing balance is below zero.
pub fn find_danger_date(snapshots: &[DailySnapshot]) -> Option<&DailySnapshot> {
    snapshots.iter().find(|snapshot| snapshot.is_negative())
}

/// Day with the smallest closing balance. Ties keep the earliest day.
pub fn find_lowest_balance(snapshots: &[DailySnapshot]) -> Option<&DailySnapshot> {
    let mut lowest: Option<&DailySnapshot> = None;
    for snapshot in snapshots {
        match lowest {
            Some(current) if snapshot.balance >= current.balance => {}
            _ => lowest = Some(snapshot),
        }
    }
    lowest
}

/// A one-time event paired with the day it lands on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventMarker {
    pub date: NaiveDate,
    pub balance: f64,
    pub event: DailyEvent,
}

/// Every one-time income or expense in sequence order, for annotating charts.
pub fn one_time_markers(snapshots: &[DailySnapshot]) -> Vec<EventMarker> {
    snapshots
        .iter()
        .flat_map(|snapshot| {
            snapshot
                .events
                .iter()
                .filter(|event| event.is_one_time)
                .map(move |event| EventMarker {
                    date: snapshot.date,
                    balance: snapshot.balance,
                    event: event.clone(),
                })
        })
        .collect()
}
