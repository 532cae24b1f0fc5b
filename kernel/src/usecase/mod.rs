pub mod book_seat;
