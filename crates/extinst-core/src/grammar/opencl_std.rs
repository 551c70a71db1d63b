//! `OpenCL.std` instructions.

use crate::descriptor::InstructionDescriptor as I;
use crate::descriptor::OperandKind::{FpRoundingMode, Id, LiteralInteger, VariableIds};

pub static ENTRIES: &[I] = &[
    I::new("acos", 0, &[Id]),
    I::new("acosh", 1, &[Id]),
    I::new("acospi", 2, &[Id]),
    I::new("asin", 3, &[Id]),
    I::new("asinh", 4, &[Id]),
    I::new("asinpi", 5, &[Id]),
    I::new("atan", 6, &[Id]),
    I::new("atan2", 7, &[Id, Id]),
    I::new("atanh", 8, &[Id]),
    I::new("atanpi", 9, &[Id]),
    I::new("atan2pi", 10, &[Id, Id]),
    I::new("cbrt", 11, &[Id]),
    I::new("ceil", 12, &[Id]),
    I::new("copysign", 13, &[Id, Id]),
    I::new("cos", 14, &[Id]),
    I::new("cosh", 15, &[Id]),
    I::new("cospi", 16, &[Id]),
    I::new("erfc", 17, &[Id]),
    I::new("erf", 18, &[Id]),
    I::new("exp", 19, &[Id]),
    I::new("exp2", 20, &[Id]),
    I::new("exp10", 21, &[Id]),
    I::new("expm1", 22, &[Id]),
    I::new("fabs", 23, &[Id]),
    I::new("fdim", 24, &[Id, Id]),
    I::new("floor", 25, &[Id]),
    I::new("fma", 26, &[Id, Id, Id]),
    I::new("fmax", 27, &[Id, Id]),
    I::new("fmin", 28, &[Id, Id]),
    I::new("fmod", 29, &[Id, Id]),
    I::new("fract", 30, &[Id, Id]),
    I::new("frexp", 31, &[Id, Id]),
    I::new("hypot", 32, &[Id, Id]),
    I::new("ilogb", 33, &[Id]),
    I::new("ldexp", 34, &[Id, Id]),
    I::new("lgamma", 35, &[Id]),
    I::new("lgamma_r", 36, &[Id, Id]),
    I::new("log", 37, &[Id]),
    I::new("log2", 38, &[Id]),
    I::new("log10", 39, &[Id]),
    I::new("log1p", 40, &[Id]),
    I::new("logb", 41, &[Id]),
    I::new("mad", 42, &[Id, Id, Id]),
    I::new("maxmag", 43, &[Id, Id]),
    I::new("minmag", 44, &[Id, Id]),
    I::new("modf", 45, &[Id, Id]),
    I::new("nan", 46, &[Id]),
    I::new("nextafter", 47, &[Id, Id]),
    I::new("pow", 48, &[Id, Id]),
    I::new("pown", 49, &[Id, Id]),
    I::new("powr", 50, &[Id, Id]),
    I::new("remainder", 51, &[Id, Id]),
    I::new("remquo", 52, &[Id, Id, Id]),
    I::new("rint", 53, &[Id]),
    I::new("rootn", 54, &[Id, Id]),
    I::new("round", 55, &[Id]),
    I::new("rsqrt", 56, &[Id]),
    I::new("sin", 57, &[Id]),
    I::new("sincos", 58, &[Id, Id]),
    I::new("sinh", 59, &[Id]),
    I::new("sinpi", 60, &[Id]),
    I::new("sqrt", 61, &[Id]),
    I::new("tan", 62, &[Id]),
    I::new("tanh", 63, &[Id]),
    I::new("tanpi", 64, &[Id]),
    I::new("tgamma", 65, &[Id]),
    I::new("trunc", 66, &[Id]),
    I::new("half_cos", 67, &[Id]),
    I::new("half_divide", 68, &[Id, Id]),
    I::new("half_exp", 69, &[Id]),
    I::new("half_exp2", 70, &[Id]),
    I::new("half_exp10", 71, &[Id]),
    I::new("half_log", 72, &[Id]),
    I::new("half_log2", 73, &[Id]),
    I::new("half_log10", 74, &[Id]),
    I::new("half_powr", 75, &[Id, Id]),
    I::new("half_recip", 76, &[Id]),
    I::new("half_rsqrt", 77, &[Id]),
    I::new("half_sin", 78, &[Id]),
    I::new("half_sqrt", 79, &[Id]),
    I::new("half_tan", 80, &[Id]),
    I::new("native_cos", 81, &[Id]),
    I::new("native_divide", 82, &[Id, Id]),
    I::new("native_exp", 83, &[Id]),
    I::new("native_exp2", 84, &[Id]),
    I::new("native_exp10", 85, &[Id]),
    I::new("native_log", 86, &[Id]),
    I::new("native_log2", 87, &[Id]),
    I::new("native_log10", 88, &[Id]),
    I::new("native_powr", 89, &[Id, Id]),
    I::new("native_recip", 90, &[Id]),
    I::new("native_rsqrt", 91, &[Id]),
    I::new("native_sin", 92, &[Id]),
    I::new("native_sqrt", 93, &[Id]),
    I::new("native_tan", 94, &[Id]),
    I::new("fclamp", 95, &[Id, Id, Id]),
    I::new("degrees", 96, &[Id]),
    I::new("fmax_common", 97, &[Id, Id]),
    I::new("fmin_common", 98, &[Id, Id]),
    I::new("mix", 99, &[Id, Id, Id]),
    I::new("radians", 100, &[Id]),
    I::new("step", 101, &[Id, Id]),
    I::new("smoothstep", 102, &[Id, Id, Id]),
    I::new("sign", 103, &[Id]),
    I::new("cross", 104, &[Id, Id]),
    I::new("distance", 105, &[Id, Id]),
    I::new("length", 106, &[Id]),
    I::new("normalize", 107, &[Id]),
    I::new("fast_distance", 108, &[Id, Id]),
    I::new("fast_length", 109, &[Id]),
    I::new("fast_normalize", 110, &[Id]),
    I::new("s_abs", 141, &[Id]),
    I::new("s_abs_diff", 142, &[Id, Id]),
    I::new("s_add_sat", 143, &[Id, Id]),
    I::new("u_add_sat", 144, &[Id, Id]),
    I::new("s_hadd", 145, &[Id, Id]),
    I::new("u_hadd", 146, &[Id, Id]),
    I::new("s_rhadd", 147, &[Id, Id]),
    I::new("u_rhadd", 148, &[Id, Id]),
    I::new("s_clamp", 149, &[Id, Id, Id]),
    I::new("u_clamp", 150, &[Id, Id, Id]),
    I::new("clz", 151, &[Id]),
    I::new("ctz", 152, &[Id]),
    I::new("s_mad_hi", 153, &[Id, Id, Id]),
    I::new("u_mad_sat", 154, &[Id, Id, Id]),
    I::new("s_mad_sat", 155, &[Id, Id, Id]),
    I::new("s_max", 156, &[Id, Id]),
    I::new("u_max", 157, &[Id, Id]),
    I::new("s_min", 158, &[Id, Id]),
    I::new("u_min", 159, &[Id, Id]),
    I::new("s_mul_hi", 160, &[Id, Id]),
    I::new("rotate", 161, &[Id, Id]),
    I::new("s_sub_sat", 162, &[Id, Id]),
    I::new("u_sub_sat", 163, &[Id, Id]),
    I::new("u_upsample", 164, &[Id, Id]),
    I::new("s_upsample", 165, &[Id, Id]),
    I::new("popcount", 166, &[Id]),
    I::new("s_mad24", 167, &[Id, Id, Id]),
    I::new("u_mad24", 168, &[Id, Id, Id]),
    I::new("s_mul24", 169, &[Id, Id]),
    I::new("u_mul24", 170, &[Id, Id]),
    I::new("vloadn", 171, &[Id, Id, LiteralInteger]),
    I::new("vstoren", 172, &[Id, Id, Id]),
    I::new("vload_half", 173, &[Id, Id]),
    I::new("vload_halfn", 174, &[Id, Id, LiteralInteger]),
    I::new("vstore_half", 175, &[Id, Id, Id]),
    I::new("vstore_half_r", 176, &[Id, Id, Id, FpRoundingMode]),
    I::new("vstore_halfn", 177, &[Id, Id, Id]),
    I::new("vstore_halfn_r", 178, &[Id, Id, Id, FpRoundingMode]),
    I::new("vloada_halfn", 179, &[Id, Id, LiteralInteger]),
    I::new("vstorea_halfn", 180, &[Id, Id, Id]),
    I::new("vstorea_halfn_r", 181, &[Id, Id, Id, FpRoundingMode]),
    I::new("shuffle", 182, &[Id, Id]),
    I::new("shuffle2", 183, &[Id, Id, Id]),
    I::new("printf", 184, &[Id, VariableIds]),
    I::new("prefetch", 185, &[Id, Id]),
    I::new("bitselect", 186, &[Id, Id, Id]),
    I::new("select", 187, &[Id, Id, Id]),
    I::new("u_abs", 201, &[Id]),
    I::new("u_abs_diff", 202, &[Id, Id]),
    I::new("u_mul_hi", 203, &[Id, Id]),
    I::new("u_mad_hi", 204, &[Id, Id, Id]),
];
