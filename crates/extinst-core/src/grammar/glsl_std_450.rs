//! `GLSL.std.450` instructions.

use crate::descriptor::Capability::{Float64, InterpolationFunction};
use crate::descriptor::InstructionDescriptor as I;
use crate::descriptor::OperandKind::Id;

pub static ENTRIES: &[I] = &[
    I::new("Round", 1, &[Id]),
    I::new("RoundEven", 2, &[Id]),
    I::new("Trunc", 3, &[Id]),
    I::new("FAbs", 4, &[Id]),
    I::new("SAbs", 5, &[Id]),
    I::new("FSign", 6, &[Id]),
    I::new("SSign", 7, &[Id]),
    I::new("Floor", 8, &[Id]),
    I::new("Ceil", 9, &[Id]),
    I::new("Fract", 10, &[Id]),
    I::new("Radians", 11, &[Id]),
    I::new("Degrees", 12, &[Id]),
    I::new("Sin", 13, &[Id]),
    I::new("Cos", 14, &[Id]),
    I::new("Tan", 15, &[Id]),
    I::new("Asin", 16, &[Id]),
    I::new("Acos", 17, &[Id]),
    I::new("Atan", 18, &[Id]),
    I::new("Sinh", 19, &[Id]),
    I::new("Cosh", 20, &[Id]),
    I::new("Tanh", 21, &[Id]),
    I::new("Asinh", 22, &[Id]),
    I::new("Acosh", 23, &[Id]),
    I::new("Atanh", 24, &[Id]),
    I::new("Atan2", 25, &[Id, Id]),
    I::new("Pow", 26, &[Id, Id]),
    I::new("Exp", 27, &[Id]),
    I::new("Log", 28, &[Id]),
    I::new("Exp2", 29, &[Id]),
    I::new("Log2", 30, &[Id]),
    I::new("Sqrt", 31, &[Id]),
    I::new("InverseSqrt", 32, &[Id]),
    I::new("Determinant", 33, &[Id]),
    I::new("MatrixInverse", 34, &[Id]),
    I::new("Modf", 35, &[Id, Id]),
    I::new("ModfStruct", 36, &[Id]),
    I::new("FMin", 37, &[Id, Id]),
    I::new("UMin", 38, &[Id, Id]),
    I::new("SMin", 39, &[Id, Id]),
    I::new("FMax", 40, &[Id, Id]),
    I::new("UMax", 41, &[Id, Id]),
    I::new("SMax", 42, &[Id, Id]),
    I::new("FClamp", 43, &[Id, Id, Id]),
    I::new("UClamp", 44, &[Id, Id, Id]),
    I::new("SClamp", 45, &[Id, Id, Id]),
    I::new("FMix", 46, &[Id, Id, Id]),
    I::new("IMix", 47, &[Id, Id, Id]),
    I::new("Step", 48, &[Id, Id]),
    I::new("SmoothStep", 49, &[Id, Id, Id]),
    I::new("Fma", 50, &[Id, Id, Id]),
    I::new("Frexp", 51, &[Id, Id]),
    I::new("FrexpStruct", 52, &[Id]),
    I::new("Ldexp", 53, &[Id, Id]),
    I::new("PackSnorm4x8", 54, &[Id]),
    I::new("PackUnorm4x8", 55, &[Id]),
    I::new("PackSnorm2x16", 56, &[Id]),
    I::new("PackUnorm2x16", 57, &[Id]),
    I::new("PackHalf2x16", 58, &[Id]),
    I::new("PackDouble2x32", 59, &[Id]).requires(&[Float64]),
    I::new("UnpackSnorm2x16", 60, &[Id]),
    I::new("UnpackUnorm2x16", 61, &[Id]),
    I::new("UnpackHalf2x16", 62, &[Id]),
    I::new("UnpackSnorm4x8", 63, &[Id]),
    I::new("UnpackUnorm4x8", 64, &[Id]),
    I::new("UnpackDouble2x32", 65, &[Id]).requires(&[Float64]),
    I::new("Length", 66, &[Id]),
    I::new("Distance", 67, &[Id, Id]),
    I::new("Cross", 68, &[Id, Id]),
    I::new("Normalize", 69, &[Id]),
    I::new("FaceForward", 70, &[Id, Id, Id]),
    I::new("Reflect", 71, &[Id, Id]),
    I::new("Refract", 72, &[Id, Id, Id]),
    I::new("FindILsb", 73, &[Id]),
    I::new("FindSMsb", 74, &[Id]),
    I::new("FindUMsb", 75, &[Id]),
    I::new("InterpolateAtCentroid", 76, &[Id]).requires(&[InterpolationFunction]),
    I::new("InterpolateAtSample", 77, &[Id, Id]).requires(&[InterpolationFunction]),
    I::new("InterpolateAtOffset", 78, &[Id, Id]).requires(&[InterpolationFunction]),
    I::new("NMin", 79, &[Id, Id]),
    I::new("NMax", 80, &[Id, Id]),
    I::new("NClamp", 81, &[Id, Id, Id]),
];
