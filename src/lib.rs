/*!
# Task Tracker

Generates a yearly task-tracking workbook (`.xlsx`) built around live
spreadsheet formulas, served over HTTP or written from the command line.

## Overview

A user picks a year. The generator lays out a workbook with:

- **Goals**: daily, weekly, monthly and yearly task targets plus a unit label
- **January … December**: one row per calendar day with the date, weekday,
  a link to the daily goal and empty task fields. Priority and Status use
  dropdown lists and are coloured by value
- **Weekly Report**: 52 seven-day windows counted from January 1st
- **Monthly Report**: one row per month sheet
- **Yearly Report**: a single row covering the whole year

Report cells are formulas (SUMPRODUCT, COUNTIF(S), SUM) that reach into the
month sheets, so the reports update as soon as the user fills in tasks.
Goals are referenced by cell, never copied, so editing the Goals sheet
updates every report.

## Architecture

- **calendar**: month lengths, weekday names and the week partition
- **goals**: goal configuration and the Goals sheet cell addresses
- **task**: month sheet columns plus the Priority and Status vocabularies
- **styles**: the format palette shared by all sheets
- **formula**: sheet quoting, range addresses and report formula text
- **sheets**: one emitter per kind of sheet
- **workbook**: orchestrates the emitters and saves the result
- **app**: axum routes for the form and the download (feature `web`)

## REST API Endpoints

- `GET /` - Year selection form
- `POST /generate` - Returns `task_tracker_<year>.xlsx` as an attachment
*/

pub mod calendar;
pub mod error;
pub mod formula;
pub mod goals;
pub mod sheets;
pub mod styles;
pub mod task;
pub mod workbook;

#[cfg(feature = "web")]
pub mod app;

pub use error::{Result, TrackerError};
pub use goals::GoalSet;
pub use workbook::{build_workbook, generate, generate_to_buffer, generate_to_file, output_filename};
