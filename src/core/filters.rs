//! Cascading filter resolver: company → cost center → shift → employee.
//!
//! Pure function of (data, selection) → filtered option sets. Changing a
//! parent selection resets every child selection to `All`; the resolver
//! itself performs no I/O.

use crate::models::company::Company;
use crate::models::cost_center::CostCenter;
use crate::models::employee::Employee;
use crate::models::shift::Shift;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Id(i64),
}

impl Selection {
    pub fn matches(&self, id: i64) -> bool {
        match self {
            Selection::All => true,
            Selection::Id(x) => *x == id,
        }
    }

    /// Match against an optional parent tag: an untagged record belongs
    /// to every selection.
    pub fn matches_tag(&self, id: Option<i64>) -> bool {
        match self {
            Selection::All => true,
            Selection::Id(x) => id.is_none() || id == Some(*x),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FilterState {
    pub company: Selection,
    pub cost_center: Selection,
    pub shift: Selection,
    pub employee: Selection,
}

impl FilterState {
    pub fn select_company(&mut self, sel: Selection) {
        self.company = sel;
        self.cost_center = Selection::All;
        self.shift = Selection::All;
        self.employee = Selection::All;
    }

    pub fn select_cost_center(&mut self, sel: Selection) {
        self.cost_center = sel;
        self.shift = Selection::All;
        self.employee = Selection::All;
    }

    pub fn select_shift(&mut self, sel: Selection) {
        self.shift = sel;
        self.employee = Selection::All;
    }

    pub fn select_employee(&mut self, sel: Selection) {
        self.employee = sel;
    }
}

pub struct FilterData<'a> {
    pub companies: &'a [Company],
    pub cost_centers: &'a [CostCenter],
    pub shifts: &'a [Shift],
    pub employees: &'a [Employee],
}

pub struct FilterOptions<'a> {
    pub companies: Vec<&'a Company>,
    pub cost_centers: Vec<&'a CostCenter>,
    pub shifts: Vec<&'a Shift>,
    pub employees: Vec<&'a Employee>,
}

/// Compute the option lists for each dependent dropdown.
pub fn resolve<'a>(data: &FilterData<'a>, state: &FilterState) -> FilterOptions<'a> {
    let companies: Vec<&Company> = data.companies.iter().collect();

    let cost_centers: Vec<&CostCenter> = data
        .cost_centers
        .iter()
        .filter(|cc| state.company.matches(cc.company_id))
        .collect();

    let shifts: Vec<&Shift> = data
        .shifts
        .iter()
        .filter(|s| state.company.matches_tag(s.company_id))
        .filter(|s| state.cost_center.matches_tag(s.cost_center_id))
        .collect();

    let employees: Vec<&Employee> = data
        .employees
        .iter()
        .filter(|e| state.company.matches(e.company_id))
        .filter(|e| state.cost_center.matches(e.cost_center_id))
        .filter(|e| match state.shift {
            Selection::All => true,
            Selection::Id(x) => e.shift_id == Some(x),
        })
        .collect();

    FilterOptions {
        companies,
        cost_centers,
        shifts,
        employees,
    }
}

/// Build a selection from CLI flags, applying them parent-first so each
/// child flag is validated against the options its parent left open.
pub fn build_state(
    data: &FilterData,
    company: Option<i64>,
    cost_center: Option<i64>,
    shift: Option<i64>,
    employee: Option<i64>,
) -> Result<FilterState, String> {
    let mut state = FilterState::default();

    if let Some(id) = company {
        if !data.companies.iter().any(|c| c.id == id) {
            return Err(format!("unknown company {id}"));
        }
        state.select_company(Selection::Id(id));
    }

    if let Some(id) = cost_center {
        let options = resolve(data, &state);
        if !options.cost_centers.iter().any(|cc| cc.id == id) {
            return Err(format!("cost center {id} is not available for this company"));
        }
        state.select_cost_center(Selection::Id(id));
    }

    if let Some(id) = shift {
        let options = resolve(data, &state);
        if !options.shifts.iter().any(|s| s.id == id) {
            return Err(format!("shift {id} is not available for this selection"));
        }
        state.select_shift(Selection::Id(id));
    }

    if let Some(id) = employee {
        let options = resolve(data, &state);
        if !options.employees.iter().any(|e| e.id == id) {
            return Err(format!("employee {id} is not available for this selection"));
        }
        state.select_employee(Selection::Id(id));
    }

    Ok(state)
}

/// Ids of the employees selected by the full filter chain, for querying
/// punch records. `None` means no restriction at all.
pub fn employee_ids(data: &FilterData, state: &FilterState) -> Option<Vec<i64>> {
    if state.company.is_all()
        && state.cost_center.is_all()
        && state.shift.is_all()
        && state.employee.is_all()
    {
        return None;
    }

    let options = resolve(data, state);
    Some(
        options
            .employees
            .iter()
            .filter(|e| state.employee.matches(e.id))
            .map(|e| e.id)
            .collect(),
    )
}
