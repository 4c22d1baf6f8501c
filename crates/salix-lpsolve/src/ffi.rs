//! Raw lp_solve bindings and the native engine implementation.
//!
//! Compiled only with the `lpsolve` feature; links against `lpsolve55`.
//! All indices crossing this boundary are 1-based, as the library expects.

use crate::engine::{
    ConstraintKind, EngineError, EngineStatistic, LpEngine, ModelFormat, RhsRanging, SimplexType,
    SolveReturn, SosType,
};
use salix_core::Sense;
use salix_solver::{LogCallback, LpConfig, MessageCallback};
use std::ffi::{c_char, c_double, c_int, c_longlong, c_uchar, c_void, CStr, CString};
use std::ptr;

#[repr(C)]
pub struct LpRec {
    _private: [u8; 0],
}

type AbortFunc = unsafe extern "C" fn(lp: *mut LpRec, userhandle: *mut c_void) -> c_int;
type LogFunc = unsafe extern "C" fn(lp: *mut LpRec, userhandle: *mut c_void, buf: *mut c_char);
type MsgFunc = unsafe extern "C" fn(lp: *mut LpRec, userhandle: *mut c_void, message: c_int);

// Event mask for put_msgfunc: presolve, improved solutions, LP/MIP
// milestones.
const MSG_MASK: c_int = 1 + 8 + 16 + 32 + 128 + 512;

#[link(name = "lpsolve55")]
extern "C" {
    fn make_lp(rows: c_int, columns: c_int) -> *mut LpRec;
    fn delete_lp(lp: *mut LpRec);
    fn get_infinite(lp: *mut LpRec) -> c_double;
    fn set_infinite(lp: *mut LpRec, infinite: c_double);

    fn set_add_rowmode(lp: *mut LpRec, turn_on: c_uchar) -> c_uchar;
    fn set_int(lp: *mut LpRec, column: c_int, must_be_int: c_uchar) -> c_uchar;
    fn is_int(lp: *mut LpRec, column: c_int) -> c_uchar;
    fn set_bounds(lp: *mut LpRec, column: c_int, lower: c_double, upper: c_double) -> c_uchar;
    fn set_lowbo(lp: *mut LpRec, column: c_int, value: c_double) -> c_uchar;
    fn set_upbo(lp: *mut LpRec, column: c_int, value: c_double) -> c_uchar;
    fn set_unbounded(lp: *mut LpRec, column: c_int) -> c_uchar;
    fn get_lowbo(lp: *mut LpRec, column: c_int) -> c_double;
    fn get_upbo(lp: *mut LpRec, column: c_int) -> c_double;

    fn set_sense(lp: *mut LpRec, maximize: c_uchar);
    fn is_maxim(lp: *mut LpRec) -> c_uchar;
    fn set_obj_fnex(
        lp: *mut LpRec,
        count: c_int,
        row: *const c_double,
        colno: *const c_int,
    ) -> c_uchar;
    fn add_constraintex(
        lp: *mut LpRec,
        count: c_int,
        row: *const c_double,
        colno: *const c_int,
        constr_type: c_int,
        rh: c_double,
    ) -> c_uchar;
    fn set_rh_range(lp: *mut LpRec, row: c_int, delta: c_double) -> c_uchar;
    fn get_rh_range(lp: *mut LpRec, row: c_int) -> c_double;
    fn get_rh(lp: *mut LpRec, row: c_int) -> c_double;
    fn get_constr_type(lp: *mut LpRec, row: c_int) -> c_int;
    fn add_SOS(
        lp: *mut LpRec,
        name: *const c_char,
        sos_type: c_int,
        priority: c_int,
        count: c_int,
        sos_vars: *const c_int,
        weights: *const c_double,
    ) -> c_int;

    fn solve(lp: *mut LpRec) -> c_int;
    fn get_Nrows(lp: *mut LpRec) -> c_int;
    fn get_Ncolumns(lp: *mut LpRec) -> c_int;
    fn get_Norig_rows(lp: *mut LpRec) -> c_int;
    fn get_Norig_columns(lp: *mut LpRec) -> c_int;
    fn get_primal_solution(lp: *mut LpRec, pv: *mut c_double) -> c_uchar;
    fn get_objective(lp: *mut LpRec) -> c_double;
    fn get_var_dualresult(lp: *mut LpRec, index: c_int, value: *mut c_double) -> c_uchar;
    fn get_ptr_sensitivity_obj(
        lp: *mut LpRec,
        obj_from: *mut *mut c_double,
        obj_till: *mut *mut c_double,
    ) -> c_uchar;
    fn get_ptr_sensitivity_rhs(
        lp: *mut LpRec,
        duals: *mut *mut c_double,
        duals_from: *mut *mut c_double,
        duals_till: *mut *mut c_double,
    ) -> c_uchar;
    fn get_mat(lp: *mut LpRec, row: c_int, column: c_int) -> c_double;
    fn get_simplextype(lp: *mut LpRec) -> c_int;

    fn get_total_iter(lp: *mut LpRec) -> c_longlong;
    fn get_total_nodes(lp: *mut LpRec) -> c_longlong;
    fn get_obj_bound(lp: *mut LpRec) -> c_double;
    fn get_working_objective(lp: *mut LpRec) -> c_double;
    fn get_maxpivot(lp: *mut LpRec) -> c_int;
    fn time_elapsed(lp: *mut LpRec) -> c_double;
    fn get_presolveloops(lp: *mut LpRec) -> c_int;
    fn get_mip_gap(lp: *mut LpRec, absolute: c_uchar) -> c_double;
    fn get_solutioncount(lp: *mut LpRec) -> c_int;

    fn set_anti_degen(lp: *mut LpRec, mode: c_int);
    fn set_basiscrash(lp: *mut LpRec, mode: c_int);
    fn set_bb_depthlimit(lp: *mut LpRec, limit: c_int);
    fn set_bb_floorfirst(lp: *mut LpRec, mode: c_int);
    fn set_bb_rule(lp: *mut LpRec, rule: c_int);
    fn set_break_at_first(lp: *mut LpRec, flag: c_uchar);
    fn set_break_at_value(lp: *mut LpRec, value: c_double);
    fn set_debug(lp: *mut LpRec, flag: c_uchar);
    fn set_epsb(lp: *mut LpRec, eps: c_double);
    fn set_epsd(lp: *mut LpRec, eps: c_double);
    fn set_epsel(lp: *mut LpRec, eps: c_double);
    fn set_epsint(lp: *mut LpRec, eps: c_double);
    fn set_epsperturb(lp: *mut LpRec, eps: c_double);
    fn set_epspivot(lp: *mut LpRec, eps: c_double);
    fn set_improve(lp: *mut LpRec, mode: c_int);
    fn set_maxpivot(lp: *mut LpRec, count: c_int);
    fn set_mip_gap(lp: *mut LpRec, absolute: c_uchar, gap: c_double);
    fn set_negrange(lp: *mut LpRec, value: c_double);
    fn set_obj_bound(lp: *mut LpRec, bound: c_double);
    fn set_obj_in_basis(lp: *mut LpRec, flag: c_uchar);
    fn set_pivoting(lp: *mut LpRec, rule: c_int);
    fn set_presolve(lp: *mut LpRec, mode: c_int, max_loops: c_int);
    fn set_scalelimit(lp: *mut LpRec, limit: c_double);
    fn set_scaling(lp: *mut LpRec, mode: c_int);
    fn set_simplextype(lp: *mut LpRec, simplex_type: c_int);
    fn set_solutionlimit(lp: *mut LpRec, limit: c_int);
    fn set_timeout(lp: *mut LpRec, seconds: c_int);
    fn set_trace(lp: *mut LpRec, flag: c_uchar);
    fn set_verbose(lp: *mut LpRec, level: c_int);
    fn set_outputfile(lp: *mut LpRec, filename: *const c_char) -> c_uchar;

    fn put_abortfunc(lp: *mut LpRec, func: Option<AbortFunc>, userhandle: *mut c_void);
    fn put_logfunc(lp: *mut LpRec, func: Option<LogFunc>, userhandle: *mut c_void);
    fn put_msgfunc(
        lp: *mut LpRec,
        func: Option<MsgFunc>,
        userhandle: *mut c_void,
        mask: c_int,
    );

    fn write_lp(lp: *mut LpRec, filename: *const c_char) -> c_uchar;
    fn write_mps(lp: *mut LpRec, filename: *const c_char) -> c_uchar;
    fn write_freemps(lp: *mut LpRec, filename: *const c_char) -> c_uchar;
    fn write_params(lp: *mut LpRec, filename: *const c_char, options: *const c_char) -> c_uchar;
    fn read_params(lp: *mut LpRec, filename: *const c_char, options: *const c_char) -> c_uchar;
    fn print_debugdump(lp: *mut LpRec, filename: *const c_char) -> c_uchar;
    fn set_XLI(lp: *mut LpRec, filename: *const c_char) -> c_uchar;
    fn write_XLI(
        lp: *mut LpRec,
        filename: *const c_char,
        options: *const c_char,
        results: c_uchar,
    ) -> c_uchar;
}

unsafe extern "C" fn abort_trampoline(_lp: *mut LpRec, userhandle: *mut c_void) -> c_int {
    let callback = &mut *(userhandle as *mut &mut dyn FnMut() -> bool);
    c_int::from(callback())
}

unsafe extern "C" fn log_trampoline(_lp: *mut LpRec, userhandle: *mut c_void, buf: *mut c_char) {
    if userhandle.is_null() || buf.is_null() {
        return;
    }
    let sink = &*(userhandle as *const LogCallback);
    if let Ok(line) = CStr::from_ptr(buf).to_str() {
        sink(line);
    }
}

unsafe extern "C" fn msg_trampoline(_lp: *mut LpRec, userhandle: *mut c_void, message: c_int) {
    if userhandle.is_null() {
        return;
    }
    let sink = &*(userhandle as *const MessageCallback);
    sink(message);
}

fn cstring(value: &str) -> Result<CString, EngineError> {
    CString::new(value).map_err(|_| EngineError::ExportFailed {
        target: value.to_string(),
    })
}

/// Engine backed by the lp_solve shared library.
pub struct LpSolveEngine {
    lp: *mut LpRec,
    log_sink: Option<Box<LogCallback>>,
    message_sink: Option<Box<MessageCallback>>,
}

// The raw handle is only ever used behind the solver's mutex.
unsafe impl Send for LpSolveEngine {}

impl Drop for LpSolveEngine {
    fn drop(&mut self) {
        unsafe { delete_lp(self.lp) };
    }
}

impl LpEngine for LpSolveEngine {
    fn create(columns: usize) -> Result<Self, EngineError> {
        let lp = unsafe { make_lp(0, columns as c_int) };
        if lp.is_null() {
            return Err(EngineError::CreationFailed { columns });
        }
        Ok(Self {
            lp,
            log_sink: None,
            message_sink: None,
        })
    }

    fn infinite(&self) -> f64 {
        unsafe { get_infinite(self.lp) }
    }

    fn set_row_mode(&mut self, enabled: bool) {
        unsafe { set_add_rowmode(self.lp, c_uchar::from(enabled)) };
    }

    fn set_integer(&mut self, column: usize, integral: bool) {
        unsafe { set_int(self.lp, column as c_int, c_uchar::from(integral)) };
    }

    fn is_integer(&self, column: usize) -> bool {
        unsafe { is_int(self.lp, column as c_int) != 0 }
    }

    fn set_bounds(&mut self, column: usize, lower: f64, upper: f64) {
        unsafe { set_bounds(self.lp, column as c_int, lower, upper) };
    }

    fn set_lower_bound(&mut self, column: usize, lower: f64) {
        unsafe { set_lowbo(self.lp, column as c_int, lower) };
    }

    fn set_upper_bound(&mut self, column: usize, upper: f64) {
        unsafe { set_upbo(self.lp, column as c_int, upper) };
    }

    fn set_unbounded(&mut self, column: usize) {
        unsafe { set_unbounded(self.lp, column as c_int) };
    }

    fn lower_bound(&self, column: usize) -> f64 {
        unsafe { get_lowbo(self.lp, column as c_int) }
    }

    fn upper_bound(&self, column: usize) -> f64 {
        unsafe { get_upbo(self.lp, column as c_int) }
    }

    fn set_direction(&mut self, sense: Sense) {
        unsafe { set_sense(self.lp, c_uchar::from(sense == Sense::Maximize)) };
    }

    fn is_maximizing(&self) -> bool {
        unsafe { is_maxim(self.lp) != 0 }
    }

    fn set_objective(&mut self, columns: &[usize], values: &[f64]) -> Result<(), EngineError> {
        if columns.len() != values.len() {
            return Err(EngineError::LengthMismatch {
                indices: columns.len(),
                values: values.len(),
            });
        }
        let colno: Vec<c_int> = columns.iter().map(|&c| c as c_int).collect();
        unsafe {
            set_obj_fnex(
                self.lp,
                colno.len() as c_int,
                values.as_ptr(),
                colno.as_ptr(),
            )
        };
        Ok(())
    }

    fn add_constraint(
        &mut self,
        columns: &[usize],
        values: &[f64],
        kind: ConstraintKind,
        rhs: f64,
    ) -> Result<usize, EngineError> {
        if columns.len() != values.len() {
            return Err(EngineError::LengthMismatch {
                indices: columns.len(),
                values: values.len(),
            });
        }
        let colno: Vec<c_int> = columns.iter().map(|&c| c as c_int).collect();
        unsafe {
            add_constraintex(
                self.lp,
                colno.len() as c_int,
                values.as_ptr(),
                colno.as_ptr(),
                kind as c_int,
                rhs,
            );
            Ok(get_Nrows(self.lp) as usize)
        }
    }

    fn set_rhs_range(&mut self, row: usize, range: f64) {
        unsafe { set_rh_range(self.lp, row as c_int, range) };
    }

    fn add_sos(
        &mut self,
        kind: SosType,
        sequence: usize,
        columns: &[usize],
        weights: &[f64],
    ) -> Result<(), EngineError> {
        if columns.len() != weights.len() {
            return Err(EngineError::LengthMismatch {
                indices: columns.len(),
                values: weights.len(),
            });
        }
        let vars: Vec<c_int> = columns.iter().map(|&c| c as c_int).collect();
        unsafe {
            add_SOS(
                self.lp,
                ptr::null(),
                kind as c_int,
                sequence as c_int,
                vars.len() as c_int,
                vars.as_ptr(),
                weights.as_ptr(),
            )
        };
        Ok(())
    }

    fn configure(&mut self, config: &LpConfig) {
        let lp = self.lp;
        unsafe {
            if let Some(v) = config.anti_degen {
                set_anti_degen(lp, v);
            }
            if let Some(v) = config.basis_crash {
                set_basiscrash(lp, v);
            }
            if let Some(v) = config.bb_depth_limit {
                set_bb_depthlimit(lp, v);
            }
            if let Some(v) = config.bb_floor_first {
                set_bb_floorfirst(lp, v);
            }
            if let Some(v) = config.bb_rule {
                set_bb_rule(lp, v);
            }
            if let Some(v) = config.break_at_first {
                set_break_at_first(lp, c_uchar::from(v));
            }
            if let Some(v) = config.break_at_value {
                set_break_at_value(lp, v);
            }
            if let Some(v) = config.debug {
                set_debug(lp, c_uchar::from(v));
            }
            if let Some(v) = config.eps_basic {
                set_epsb(lp, v);
            }
            if let Some(v) = config.eps_dual {
                set_epsd(lp, v);
            }
            if let Some(v) = config.eps_general {
                set_epsel(lp, v);
            }
            if let Some(v) = config.eps_int {
                set_epsint(lp, v);
            }
            if let Some(v) = config.eps_perturb {
                set_epsperturb(lp, v);
            }
            if let Some(v) = config.eps_pivot {
                set_epspivot(lp, v);
            }
            if let Some(v) = config.improve {
                set_improve(lp, v);
            }
            if let Some(v) = config.infinite {
                set_infinite(lp, v);
            }
            if let Some(v) = config.max_pivot {
                set_maxpivot(lp, v);
            }
            if let Some(v) = config.mip_gap_abs {
                set_mip_gap(lp, 1, v);
            }
            if let Some(v) = config.mip_gap_rel {
                set_mip_gap(lp, 0, v);
            }
            if let Some(v) = config.neg_range {
                set_negrange(lp, v);
            }
            if let Some(v) = config.obj_bound {
                set_obj_bound(lp, v);
            }
            if let Some(v) = config.obj_in_basis {
                set_obj_in_basis(lp, c_uchar::from(v));
            }
            if let Some(v) = config.pivoting {
                set_pivoting(lp, v);
            }
            if let Some(v) = config.presolve {
                set_presolve(lp, v, config.presolve_max_loops.unwrap_or(0));
            }
            if let Some(v) = config.scale_limit {
                set_scalelimit(lp, v);
            }
            if let Some(v) = config.scaling {
                set_scaling(lp, v);
            }
            if let Some(v) = config.simplex_type {
                set_simplextype(lp, v);
            }
            if let Some(v) = config.solution_limit {
                set_solutionlimit(lp, v);
            }
            if let Some(v) = config.effective_timeout() {
                set_timeout(lp, v as c_int);
            }
            if let Some(v) = config.trace {
                set_trace(lp, c_uchar::from(v));
            }
            if let Some(v) = config.verbosity {
                set_verbose(lp, v);
            }
            if let Some(path) = &config.log_file {
                if let Ok(path) = cstring(path) {
                    set_outputfile(lp, path.as_ptr());
                }
            }
        }
        self.log_sink = config.log.clone().map(Box::new);
        self.message_sink = config.message.clone().map(Box::new);
    }

    fn solve(&mut self, abort: &mut dyn FnMut() -> bool) -> SolveReturn {
        let mut callback: &mut dyn FnMut() -> bool = abort;
        let handle = (&mut callback as *mut &mut dyn FnMut() -> bool).cast::<c_void>();
        unsafe {
            put_abortfunc(self.lp, Some(abort_trampoline), handle);
            if let Some(sink) = &self.log_sink {
                put_logfunc(
                    self.lp,
                    Some(log_trampoline),
                    (sink.as_ref() as *const LogCallback as *mut LogCallback).cast(),
                );
            }
            if let Some(sink) = &self.message_sink {
                put_msgfunc(
                    self.lp,
                    Some(msg_trampoline),
                    (sink.as_ref() as *const MessageCallback as *mut MessageCallback).cast(),
                    MSG_MASK,
                );
            }
            let code = solve(self.lp);
            put_abortfunc(self.lp, None, ptr::null_mut());
            put_logfunc(self.lp, None, ptr::null_mut());
            put_msgfunc(self.lp, None, ptr::null_mut(), 0);
            SolveReturn::from_code(code)
        }
    }

    fn row_count(&self) -> usize {
        unsafe { get_Nrows(self.lp) as usize }
    }

    fn column_count(&self) -> usize {
        unsafe { get_Ncolumns(self.lp) as usize }
    }

    fn original_row_count(&self) -> usize {
        unsafe { get_Norig_rows(self.lp) as usize }
    }

    fn original_column_count(&self) -> usize {
        unsafe { get_Norig_columns(self.lp) as usize }
    }

    fn primal_solution(&self) -> Option<Vec<f64>> {
        let len = 1 + self.original_row_count() + self.original_column_count();
        let mut values = vec![0.0; len];
        let ok = unsafe { get_primal_solution(self.lp, values.as_mut_ptr()) };
        (ok != 0).then_some(values)
    }

    fn objective_value(&self) -> f64 {
        unsafe { get_objective(self.lp) }
    }

    fn dual_result(&self, index: usize) -> Option<f64> {
        let mut value = 0.0;
        let ok = unsafe { get_var_dualresult(self.lp, index as c_int, &mut value) };
        (ok != 0).then_some(value)
    }

    fn objective_ranging(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        let count = self.column_count();
        let mut from: *mut c_double = ptr::null_mut();
        let mut till: *mut c_double = ptr::null_mut();
        let ok = unsafe { get_ptr_sensitivity_obj(self.lp, &mut from, &mut till) };
        if ok == 0 || from.is_null() || till.is_null() {
            return None;
        }
        unsafe {
            Some((
                std::slice::from_raw_parts(from, count).to_vec(),
                std::slice::from_raw_parts(till, count).to_vec(),
            ))
        }
    }

    fn rhs_ranging(&self) -> Option<RhsRanging> {
        let count = self.row_count() + self.column_count();
        let mut duals: *mut c_double = ptr::null_mut();
        let mut from: *mut c_double = ptr::null_mut();
        let mut till: *mut c_double = ptr::null_mut();
        let ok = unsafe { get_ptr_sensitivity_rhs(self.lp, &mut duals, &mut from, &mut till) };
        if ok == 0 || duals.is_null() || from.is_null() || till.is_null() {
            return None;
        }
        unsafe {
            Some(RhsRanging {
                duals: std::slice::from_raw_parts(duals, count).to_vec(),
                lowers: std::slice::from_raw_parts(from, count).to_vec(),
                uppers: std::slice::from_raw_parts(till, count).to_vec(),
            })
        }
    }

    fn objective_coefficient(&self, column: usize) -> f64 {
        unsafe { get_mat(self.lp, 0, column as c_int) }
    }

    fn rhs(&self, row: usize) -> f64 {
        unsafe { get_rh(self.lp, row as c_int) }
    }

    fn rhs_range(&self, row: usize) -> f64 {
        unsafe { get_rh_range(self.lp, row as c_int) }
    }

    fn constraint_kind(&self, row: usize) -> ConstraintKind {
        match unsafe { get_constr_type(self.lp, row as c_int) } {
            1 => ConstraintKind::LessEqual,
            2 => ConstraintKind::GreaterEqual,
            3 => ConstraintKind::Equal,
            _ => ConstraintKind::Free,
        }
    }

    fn simplex_type(&self) -> SimplexType {
        match unsafe { get_simplextype(self.lp) } {
            5 => SimplexType::PrimalPrimal,
            6 => SimplexType::DualPrimal,
            9 => SimplexType::PrimalDual,
            _ => SimplexType::DualDual,
        }
    }

    fn statistic(&self, statistic: EngineStatistic) -> f64 {
        unsafe {
            match statistic {
                EngineStatistic::TotalIterations => get_total_iter(self.lp) as f64,
                EngineStatistic::TotalNodes => get_total_nodes(self.lp) as f64,
                EngineStatistic::ObjectiveBound => get_obj_bound(self.lp),
                EngineStatistic::WorkingObjective => get_working_objective(self.lp),
                EngineStatistic::MaxPivot => f64::from(get_maxpivot(self.lp)),
                EngineStatistic::ElapsedSeconds => time_elapsed(self.lp),
                EngineStatistic::PresolveLoops => f64::from(get_presolveloops(self.lp)),
                EngineStatistic::MipGap => get_mip_gap(self.lp, 1),
                EngineStatistic::SolutionCount => f64::from(get_solutioncount(self.lp)),
            }
        }
    }

    fn write_model(&self, format: ModelFormat, path: &str) -> Result<(), EngineError> {
        let filename = cstring(path)?;
        let ok = unsafe {
            match format {
                ModelFormat::Lp => write_lp(self.lp, filename.as_ptr()),
                ModelFormat::Mps => write_mps(self.lp, filename.as_ptr()),
                ModelFormat::FreeMps => write_freemps(self.lp, filename.as_ptr()),
            }
        };
        if ok == 0 {
            return Err(EngineError::ExportFailed {
                target: path.to_string(),
            });
        }
        Ok(())
    }

    fn write_params(&self, path: &str, options: &str) -> Result<(), EngineError> {
        let filename = cstring(path)?;
        let options = cstring(options)?;
        let ok = unsafe { write_params(self.lp, filename.as_ptr(), options.as_ptr()) };
        if ok == 0 {
            return Err(EngineError::ExportFailed {
                target: path.to_string(),
            });
        }
        Ok(())
    }

    fn read_params(&mut self, path: &str, options: &str) -> Result<(), EngineError> {
        let filename = cstring(path)?;
        let options = cstring(options)?;
        let ok = unsafe { read_params(self.lp, filename.as_ptr(), options.as_ptr()) };
        if ok == 0 {
            return Err(EngineError::ExportFailed {
                target: path.to_string(),
            });
        }
        Ok(())
    }

    fn write_external(
        &self,
        library: &str,
        path: &str,
        options: &str,
    ) -> Result<(), EngineError> {
        let library_name = cstring(library)?;
        let filename = cstring(path)?;
        let options = cstring(options)?;
        unsafe {
            if set_XLI(self.lp, library_name.as_ptr()) == 0 {
                return Err(EngineError::ExportFailed {
                    target: library.to_string(),
                });
            }
            if write_XLI(self.lp, filename.as_ptr(), options.as_ptr(), 0) == 0 {
                return Err(EngineError::ExportFailed {
                    target: path.to_string(),
                });
            }
        }
        Ok(())
    }

    fn debug_dump(&self, path: &str) -> Result<(), EngineError> {
        let filename = cstring(path)?;
        let ok = unsafe { print_debugdump(self.lp, filename.as_ptr()) };
        if ok == 0 {
            return Err(EngineError::ExportFailed {
                target: path.to_string(),
            });
        }
        Ok(())
    }
}
