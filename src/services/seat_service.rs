//! Servicio de seat map
//!
//! Calcula el estado de los asientos de una route para una fecha de viaje:
//! capacidad N => asientos 1..N, marcados booked/available según los tickets
//! vivos de esa route/fecha.

use serde::Serialize;
use std::collections::HashSet;

/// Estado de un asiento individual
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Seat {
    pub seat_number: i32,
    pub is_booked: bool,
}

/// Seat map completo de una route/fecha
#[derive(Debug, Serialize)]
pub struct SeatMap {
    pub route_id: uuid::Uuid,
    pub travel_date: chrono::NaiveDate,
    pub capacity: i32,
    pub available_count: i32,
    pub seats: Vec<Seat>,
}

/// Construir la lista de asientos a partir de la capacidad y los asientos
/// ya reservados
pub fn build_seats(capacity: i32, booked: &[i32]) -> Vec<Seat> {
    let booked_set: HashSet<i32> = booked.iter().copied().collect();

    (1..=capacity)
        .map(|seat_number| Seat {
            seat_number,
            is_booked: booked_set.contains(&seat_number),
        })
        .collect()
}

/// Construir el seat map completo
pub fn build_seat_map(
    route_id: uuid::Uuid,
    travel_date: chrono::NaiveDate,
    capacity: i32,
    booked: &[i32],
) -> SeatMap {
    let seats = build_seats(capacity, booked);
    let available_count = seats.iter().filter(|s| !s.is_booked).count() as i32;

    SeatMap {
        route_id,
        travel_date,
        capacity,
        available_count,
        seats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_build_seats_empty_bus() {
        let seats = build_seats(4, &[]);
        assert_eq!(seats.len(), 4);
        assert!(seats.iter().all(|s| !s.is_booked));
        assert_eq!(seats[0].seat_number, 1);
        assert_eq!(seats[3].seat_number, 4);
    }

    #[test]
    fn test_build_seats_marks_booked() {
        let seats = build_seats(5, &[2, 5]);
        assert!(!seats[0].is_booked);
        assert!(seats[1].is_booked);
        assert!(!seats[2].is_booked);
        assert!(!seats[3].is_booked);
        assert!(seats[4].is_booked);
    }

    #[test]
    fn test_build_seats_ignores_out_of_range() {
        // Un seat_number fuera de capacidad (dato histórico) no debe romper el map
        let seats = build_seats(3, &[7]);
        assert_eq!(seats.len(), 3);
        assert!(seats.iter().all(|s| !s.is_booked));
    }

    #[test]
    fn test_build_seat_map_counts_available() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        let map = build_seat_map(Uuid::new_v4(), date, 44, &[1, 2, 3]);
        assert_eq!(map.capacity, 44);
        assert_eq!(map.available_count, 41);
        assert_eq!(map.seats.len(), 44);
    }
}
