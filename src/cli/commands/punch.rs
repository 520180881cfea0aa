use crate::cli::parser::{Commands, PunchAction};
use crate::config::Config;
use crate::core::filters::{self, FilterData};
use crate::core::timefix;
use crate::db::pool::DbPool;
use crate::db::{companies, cost_centers, employees, notifications, punches, shifts};
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::models::punch::{PunchRecord, SLOT_COUNT};
use crate::ui::messages::{success, warning};
use crate::utils::colors::colorize_slot;
use crate::utils::table::Table;
use crate::utils::{date, time};
use chrono::{DateTime, Utc};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            PunchAction::Add {
                matricula,
                date: date_raw,
                times,
            } => {
                let d = date::parse_date(date_raw)
                    .ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;

                let parsed = time::parse_time_list(times)?;
                if parsed.is_empty() {
                    return Err(AppError::InvalidTime("no punch times given".to_string()));
                }
                if parsed.len() > SLOT_COUNT {
                    return Err(AppError::InvalidTime(format!(
                        "at most {} punch times per day ({} given)",
                        SLOT_COUNT,
                        parsed.len()
                    )));
                }

                let employee = employees::find_by_matricula(&pool.conn, matricula)?.ok_or(
                    AppError::NotFound {
                        entity: "employee",
                        key: matricula.clone(),
                    },
                )?;

                let mut slots: [Option<DateTime<Utc>>; SLOT_COUNT] = [None; SLOT_COUNT];
                for (i, t) in parsed.iter().enumerate() {
                    slots[i] = Some(timefix::store_timestamp(d, *t));
                }

                let rec = PunchRecord::new(
                    employee.id,
                    employee.cost_center_id,
                    d,
                    slots,
                    &cfg.default_punch_source,
                );
                let id = punches::insert_punch(&pool.conn, &rec)?;

                notifications::notify(&pool.conn, "punch_add", matricula, "Punch record added")?;
                success(format!(
                    "Punch record {} added for {} on {} ({} punches).",
                    id,
                    matricula,
                    rec.date_str(),
                    rec.punch_count()
                ));
            }

            PunchAction::List {
                period,
                company,
                cost_center,
                shift,
                employee,
            } => {
                let all_companies = companies::list_companies(&pool.conn)?;
                let all_cost_centers = cost_centers::list_cost_centers(&pool.conn, None)?;
                let all_shifts = shifts::list_shifts(&pool.conn)?;
                let all_employees = employees::list_employees(&pool.conn)?;

                let data = FilterData {
                    companies: &all_companies,
                    cost_centers: &all_cost_centers,
                    shifts: &all_shifts,
                    employees: &all_employees,
                };

                let state =
                    filters::build_state(&data, *company, *cost_center, *shift, *employee)
                        .map_err(AppError::InvalidFilter)?;
                let ids = filters::employee_ids(&data, &state);

                let bounds = match period {
                    None => None,
                    Some(p) if p.eq_ignore_ascii_case("all") => None,
                    Some(p) => Some(parse_range(p)?),
                };

                let records = punches::list_punches(&pool.conn, bounds, ids.as_deref())?;

                if records.is_empty() {
                    warning("No punch records found.");
                    return Ok(());
                }

                let offset = timefix::display_offset(&pool.conn)?;

                let mut table = Table::new(&[
                    "ID", "Date", "Matricula", "Employee", "B1", "B2", "B3", "B4", "B5", "B6",
                    "B7", "B8",
                ]);

                for rec in &records {
                    let emp = all_employees.iter().find(|e| e.id == rec.employee_id);
                    let mut row = vec![
                        rec.id.to_string(),
                        rec.date_str(),
                        emp.map_or("?".to_string(), |e| e.matricula.clone()),
                        emp.map_or("?".to_string(), |e| e.name.clone()),
                    ];
                    for s in &rec.slots {
                        row.push(colorize_slot(
                            &s.map_or("-".to_string(), |ts| timefix::display_time(ts, offset)),
                        ));
                    }
                    table.add_row(row);
                }

                print!("{}", table.render());
                println!("{} record(s).", records.len());
            }

            PunchAction::Del { id } => {
                let n = punches::delete_punch(&pool.conn, *id)?;
                if n == 0 {
                    return Err(AppError::NotFound {
                        entity: "punch record",
                        key: id.to_string(),
                    });
                }
                notifications::notify(
                    &pool.conn,
                    "punch_del",
                    &id.to_string(),
                    "Punch record deleted",
                )?;
                success(format!("Punch record {} deleted.", id));
            }
        }
    }
    Ok(())
}
