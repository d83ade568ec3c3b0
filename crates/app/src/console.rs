//! Interactive booking console
//!
//! Prompts the operator for customer details, a room type and a night count,
//! then hands the validated values to the [`BookingService`].

use std::io::{self, BufRead, Write};

use resort_core::{BookingRequestOutcome, BookingService, RoomType};

use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Input closed")]
    EndOfInput,
}

type Result<T> = std::result::Result<T, ConsoleError>;

/// Console session over any line-based input and output
pub struct Console<R, W> {
    input: R,
    output: W,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Serve customers until the operator answers "no" or input ends
    pub fn run(&mut self, service: &mut BookingService) -> Result<()> {
        loop {
            match self.serve_customer(service) {
                Ok(()) => {}
                Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            }

            match self.ask_another_booking() {
                Ok(true) => {}
                Ok(false) | Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        writeln!(
            self.output,
            "Thank you for using the Resort Booking System. Goodbye!"
        )?;
        Ok(())
    }

    /// Take one customer through to a booking (or a full house)
    fn serve_customer(&mut self, service: &mut BookingService) -> Result<()> {
        let name = self.read_name()?;
        let contact = self.prompt("Enter contact number: ")?;

        loop {
            if !service.registry().has_any_available() {
                writeln!(self.output, "Sorry, all rooms are currently booked.")?;
                return Ok(());
            }

            self.print_menu(service)?;
            let room_type = self.read_room_type()?;

            if service.find_available_room(room_type).is_none() {
                self.print_no_availability(room_type)?;
                continue;
            }

            let nights = self.read_nights()?;

            match service.request_booking(&name, &contact, room_type, nights) {
                Ok(BookingRequestOutcome::Confirmed {
                    booking,
                    total_cost,
                }) => {
                    writeln!(
                        self.output,
                        "\nBooking confirmed for {} in Room {}",
                        booking.customer().name(),
                        booking.room_id()
                    )?;
                    writeln!(self.output, "Booking reference: {}", booking.id())?;
                    writeln!(
                        self.output,
                        "Total cost: {}",
                        self.config.format_money(total_cost)
                    )?;
                    return Ok(());
                }
                Ok(BookingRequestOutcome::Rejected {
                    reason, total_cost, ..
                }) => {
                    writeln!(self.output, "{}", reason)?;
                    writeln!(
                        self.output,
                        "Total cost: {}",
                        self.config.format_money(total_cost)
                    )?;
                    return Ok(());
                }
                Ok(BookingRequestOutcome::NoAvailability(room_type)) => {
                    self.print_no_availability(room_type)?;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Booking request refused");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn print_menu(&mut self, service: &BookingService) -> Result<()> {
        writeln!(self.output, "Room Types Available:")?;
        for counts in service.registry().availability() {
            writeln!(
                self.output,
                "{}. {} Room ({} per night) - {} of {} free",
                counts.room_type.selector(),
                counts.room_type,
                self.config.format_money(counts.room_type.price_per_night()),
                counts.available,
                counts.total
            )?;
        }
        Ok(())
    }

    fn print_no_availability(&mut self, room_type: RoomType) -> Result<()> {
        writeln!(
            self.output,
            "No available {} rooms. Please try a different room type.",
            room_type
        )?;
        Ok(())
    }

    fn read_name(&mut self) -> Result<String> {
        loop {
            let name = self.prompt("Enter customer name: ")?;
            if !name.is_empty() {
                return Ok(name);
            }
            writeln!(self.output, "Customer name cannot be empty.")?;
        }
    }

    fn read_room_type(&mut self) -> Result<RoomType> {
        loop {
            let choice = self.prompt("Choose room type (1 or 2): ")?;
            match choice.parse::<RoomType>() {
                Ok(room_type) => return Ok(room_type),
                Err(_) => writeln!(
                    self.output,
                    "Invalid choice. Please enter 1 for Standard Room or 2 for Deluxe Room."
                )?,
            }
        }
    }

    fn read_nights(&mut self) -> Result<u32> {
        loop {
            let answer = self.prompt("Enter number of nights: ")?;
            match answer.parse::<u32>() {
                Ok(nights) if nights > 0 => return Ok(nights),
                _ => writeln!(self.output, "Please enter a positive number of nights.")?,
            }
        }
    }

    fn ask_another_booking(&mut self) -> Result<bool> {
        let answer = self.prompt("\nDo you want to make another booking? (yes/no): ")?;
        Ok(!answer.eq_ignore_ascii_case("no"))
    }

    /// Print a prompt and read one trimmed line
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }
}
