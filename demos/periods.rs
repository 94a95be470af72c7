use chrono::{NaiveDate, NaiveTime};
use chronospan::{AnyPeriod, DatePeriod, Instant, InstantPeriod, Operand, TimePeriod};

fn main() {
    let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
    let t = |h, min| NaiveTime::from_hms_opt(h, min, 0).unwrap();

    let booking = DatePeriod::new(d(1, 1), d(1, 10)).unwrap();
    let renovation = DatePeriod::new(d(1, 9), d(1, 30)).unwrap();

    println!("Booking: {booking} ({})", booking.span().render(true));
    println!("Overlap: {:?}", booking.get_overlap(&renovation));
    println!("Bookable before works: {:?}", booking.get_disconnect(&renovation));

    let stay = booking.combine(&t(14, 0)).unwrap();
    println!("Stay: {stay}");
    println!("Stay length (days): {:.3}", stay.duration_days().value());

    let breakfast = TimePeriod::new(t(7, 0), t(10, 0)).unwrap();
    println!("Breakfast served: {:?}", stay.recurrence(&breakfast));

    let checkout = Instant::from_parts(d(1, 10), t(11, 0));
    let late = InstantPeriod::new(checkout, Instant::from_parts(d(1, 10), t(13, 0))).unwrap();
    let any = AnyPeriod::from(stay);
    println!("Late checkout inside stay: {}", any.contains(&Operand::from(late)));
}
