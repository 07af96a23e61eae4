pub mod city;
pub mod day_report;
pub mod hour_report;
pub mod temperature;
