//! WebGPU enum name data.
//!
//! This file contains only DATA: the ordered variant names of every enum
//! category that crosses the binding boundary. The lookup logic is in
//! table.rs. Slot order is the wire ordinal and must not change; `None`
//! marks an ordinal the API reserves as undefined.

use phf::phf_ordered_map;

/// Ordered variant slots of one category; the index is the ordinal.
pub type Variants = &'static [Option<&'static str>];

pub const ADDRESS_MODE: Variants = &[
    Some("repeat"),
    Some("mirror-repeat"),
    Some("clamp-to-edge"),
];

pub const BLEND_FACTOR: Variants = &[
    Some("zero"),
    Some("one"),
    Some("src"),
    Some("one-minus-src"),
    Some("src-alpha"),
    Some("one-minus-src-alpha"),
    Some("dst"),
    Some("one-minus-dst"),
    Some("dst-alpha"),
    Some("one-minus-dst-alpha"),
    Some("src-alpha-saturated"),
    Some("constant"),
    Some("one-minus-constant"),
];

pub const BLEND_OPERATION: Variants = &[
    Some("add"),
    Some("subtract"),
    Some("reverse-subtract"),
    Some("min"),
    Some("max"),
];

pub const BUFFER_BINDING_TYPE: Variants = &[
    None,
    Some("uniform"),
    Some("storage"),
    Some("read-only-storage"),
];

pub const BUFFER_MAP_STATE: Variants = &[
    Some("unmapped"),
    Some("pending"),
    Some("mapped"),
];

pub const COMPARE_FUNCTION: Variants = &[
    None,
    Some("never"),
    Some("less"),
    Some("less-equal"),
    Some("greater"),
    Some("greater-equal"),
    Some("equal"),
    Some("not-equal"),
    Some("always"),
];

pub const COMPILATION_INFO_REQUEST_STATUS: Variants = &[
    Some("success"),
    Some("error"),
    Some("device-lost"),
    Some("unknown"),
];

pub const COMPUTE_PASS_TIMESTAMP_LOCATION: Variants = &[
    Some("beginning"),
    Some("end"),
];

pub const CULL_MODE: Variants = &[
    Some("none"),
    Some("front"),
    Some("back"),
];

pub const ERROR_FILTER: Variants = &[
    Some("validation"),
    Some("out-of-memory"),
    Some("internal"),
];

pub const FEATURE_NAME: Variants = &[
    None,
    Some("depth-clip-control"),
    Some("depth32float-stencil8"),
    Some("timestamp-query"),
    Some("pipeline-statistics-query"),
    Some("texture-compression-bc"),
    Some("texture-compression-etc2"),
    Some("texture-compression-astc"),
    Some("indirect-first-instance"),
    Some("shader-f16"),
    Some("rg11b10ufloat-renderable"),
    Some("bgra8unorm-storage"),
    Some("float32filterable"),
];

pub const FILTER_MODE: Variants = &[
    Some("nearest"),
    Some("linear"),
];

pub const FRONT_FACE: Variants = &[
    Some("ccw"),
    Some("cw"),
];

pub const INDEX_FORMAT: Variants = &[
    None,
    Some("uint16"),
    Some("uint32"),
];

pub const LOAD_OP: Variants = &[
    None,
    Some("clear"),
    Some("load"),
];

pub const MIPMAP_FILTER_MODE: Variants = &[
    Some("nearest"),
    Some("linear"),
];

pub const PIPELINE_STATISTIC_NAME: Variants = &[
    Some("vertex-shader-invocations"),
    Some("clipper-invocations"),
    Some("clipper-primitives-out"),
    Some("fragment-shader-invocations"),
    Some("compute-shader-invocations"),
];

pub const POWER_PREFERENCE: Variants = &[
    None,
    Some("low-power"),
    Some("high-performance"),
];

pub const PRIMITIVE_TOPOLOGY: Variants = &[
    Some("point-list"),
    Some("line-list"),
    Some("line-strip"),
    Some("triangle-list"),
    Some("triangle-strip"),
];

pub const QUERY_TYPE: Variants = &[
    Some("occlusion"),
    Some("pipeline-statistics"),
    Some("timestamp"),
];

pub const RENDER_PASS_TIMESTAMP_LOCATION: Variants = &[
    Some("beginning"),
    Some("end"),
];

pub const SAMPLER_BINDING_TYPE: Variants = &[
    None,
    Some("filtering"),
    Some("non-filtering"),
    Some("comparison"),
];

pub const STENCIL_OPERATION: Variants = &[
    Some("keep"),
    Some("zero"),
    Some("replace"),
    Some("invert"),
    Some("increment-clamp"),
    Some("decrement-clamp"),
    Some("increment-wrap"),
    Some("decrement-wrap"),
];

pub const STORAGE_TEXTURE_ACCESS: Variants = &[
    None,
    Some("write-only"),
];

pub const STORE_OP: Variants = &[
    None,
    Some("store"),
    Some("discard"),
];

pub const TEXTURE_ASPECT: Variants = &[
    Some("all"),
    Some("stencil-only"),
    Some("depth-only"),
];

pub const TEXTURE_DIMENSION: Variants = &[
    Some("1d"),
    Some("2d"),
    Some("3d"),
];

pub const TEXTURE_FORMAT: Variants = &[
    None,
    Some("r8unorm"),
    Some("r8snorm"),
    Some("r8uint"),
    Some("r8sint"),
    Some("r16uint"),
    Some("r16sint"),
    Some("r16float"),
    Some("rg8unorm"),
    Some("rg8snorm"),
    Some("rg8uint"),
    Some("rg8sint"),
    Some("r32float"),
    Some("r32uint"),
    Some("r32sint"),
    Some("rg16uint"),
    Some("rg16sint"),
    Some("rg16float"),
    Some("rgba8unorm"),
    Some("rgba8unorm-srgb"),
    Some("rgba8snorm"),
    Some("rgba8uint"),
    Some("rgba8sint"),
    Some("bgra8unorm"),
    Some("bgra8unorm-srgb"),
    Some("rgb10a2unorm"),
    Some("rg11b10ufloat"),
    Some("rgb9e5ufloat"),
    Some("rg32float"),
    Some("rg32uint"),
    Some("rg32sint"),
    Some("rgba16uint"),
    Some("rgba16sint"),
    Some("rgba16float"),
    Some("rgba32float"),
    Some("rgba32uint"),
    Some("rgba32sint"),
    Some("stencil8"),
    Some("depth16unorm"),
    Some("depth24plus"),
    Some("depth24plus-stencil8"),
    Some("depth32float"),
    Some("depth32float-stencil8"),
    Some("bc1-rgba-unorm"),
    Some("bc1-rgba-unorm-srgb"),
    Some("bc2-rgba-unorm"),
    Some("bc2-rgba-unorm-srgb"),
    Some("bc3-rgba-unorm"),
    Some("bc3-rgba-unorm-srgb"),
    Some("bc4-r-unorm"),
    Some("bc4-r-snorm"),
    Some("bc5-rg-unorm"),
    Some("bc5-rg-snorm"),
    Some("bc6h-rgb-ufloat"),
    Some("bc6h-rgb-float"),
    Some("bc7-rgba-unorm"),
    Some("bc7-rgba-unorm-srgb"),
    Some("etc2-rgb8unorm"),
    Some("etc2-rgb8unorm-srgb"),
    Some("etc2-rgb8a1unorm"),
    Some("etc2-rgb8a1unorm-srgb"),
    Some("etc2-rgba8unorm"),
    Some("etc2-rgba8unorm-srgb"),
    Some("eac-r11unorm"),
    Some("eac-r11snorm"),
    Some("eac-rg11unorm"),
    Some("eac-rg11snorm"),
    Some("astc-4x4-unorm"),
    Some("astc-4x4-unorm-srgb"),
    Some("astc-5x4-unorm"),
    Some("astc-5x4-unorm-srgb"),
    Some("astc-5x5-unorm"),
    Some("astc-5x5-unorm-srgb"),
    Some("astc-6x5-unorm"),
    Some("astc-6x5-unorm-srgb"),
    Some("astc-6x6-unorm"),
    Some("astc-6x6-unorm-srgb"),
    Some("astc-8x5-unorm"),
    Some("astc-8x5-unorm-srgb"),
    Some("astc-8x6-unorm"),
    Some("astc-8x6-unorm-srgb"),
    Some("astc-8x8-unorm"),
    Some("astc-8x8-unorm-srgb"),
    Some("astc-10x5-unorm"),
    Some("astc-10x5-unorm-srgb"),
    Some("astc-10x6-unorm"),
    Some("astc-10x6-unorm-srgb"),
    Some("astc-10x8-unorm"),
    Some("astc-10x8-unorm-srgb"),
    Some("astc-10x10-unorm"),
    Some("astc-10x10-unorm-srgb"),
    Some("astc-12x10-unorm"),
    Some("astc-12x10-unorm-srgb"),
    Some("astc-12x12-unorm"),
    Some("astc-12x12-unorm-srgb"),
];

pub const TEXTURE_SAMPLE_TYPE: Variants = &[
    None,
    Some("float"),
    Some("unfilterable-float"),
    Some("depth"),
    Some("sint"),
    Some("uint"),
];

pub const TEXTURE_VIEW_DIMENSION: Variants = &[
    None,
    Some("1d"),
    Some("2d"),
    Some("2d-array"),
    Some("cube"),
    Some("cube-array"),
    Some("3d"),
];

pub const VERTEX_FORMAT: Variants = &[
    None,
    Some("uint8x2"),
    Some("uint8x4"),
    Some("sint8x2"),
    Some("sint8x4"),
    Some("unorm8x2"),
    Some("unorm8x4"),
    Some("snorm8x2"),
    Some("snorm8x4"),
    Some("uint16x2"),
    Some("uint16x4"),
    Some("sint16x2"),
    Some("sint16x4"),
    Some("unorm16x2"),
    Some("unorm16x4"),
    Some("snorm16x2"),
    Some("snorm16x4"),
    Some("float16x2"),
    Some("float16x4"),
    Some("float32"),
    Some("float32x2"),
    Some("float32x3"),
    Some("float32x4"),
    Some("uint32"),
    Some("uint32x2"),
    Some("uint32x3"),
    Some("uint32x4"),
    Some("sint32"),
    Some("sint32x2"),
    Some("sint32x3"),
    Some("sint32x4"),
];

pub const VERTEX_STEP_MODE: Variants = &[
    Some("vertex"),
    Some("instance"),
    None,
];

/// Every category keyed by name, in persisted (alphabetical) order.
pub static ENUM_TABLES: phf::OrderedMap<&'static str, Variants> = phf_ordered_map! {
    "AddressMode" => ADDRESS_MODE,
    "BlendFactor" => BLEND_FACTOR,
    "BlendOperation" => BLEND_OPERATION,
    "BufferBindingType" => BUFFER_BINDING_TYPE,
    "BufferMapState" => BUFFER_MAP_STATE,
    "CompareFunction" => COMPARE_FUNCTION,
    "CompilationInfoRequestStatus" => COMPILATION_INFO_REQUEST_STATUS,
    "ComputePassTimestampLocation" => COMPUTE_PASS_TIMESTAMP_LOCATION,
    "CullMode" => CULL_MODE,
    "ErrorFilter" => ERROR_FILTER,
    "FeatureName" => FEATURE_NAME,
    "FilterMode" => FILTER_MODE,
    "FrontFace" => FRONT_FACE,
    "IndexFormat" => INDEX_FORMAT,
    "LoadOp" => LOAD_OP,
    "MipmapFilterMode" => MIPMAP_FILTER_MODE,
    "PipelineStatisticName" => PIPELINE_STATISTIC_NAME,
    "PowerPreference" => POWER_PREFERENCE,
    "PrimitiveTopology" => PRIMITIVE_TOPOLOGY,
    "QueryType" => QUERY_TYPE,
    "RenderPassTimestampLocation" => RENDER_PASS_TIMESTAMP_LOCATION,
    "SamplerBindingType" => SAMPLER_BINDING_TYPE,
    "StencilOperation" => STENCIL_OPERATION,
    "StorageTextureAccess" => STORAGE_TEXTURE_ACCESS,
    "StoreOp" => STORE_OP,
    "TextureAspect" => TEXTURE_ASPECT,
    "TextureDimension" => TEXTURE_DIMENSION,
    "TextureFormat" => TEXTURE_FORMAT,
    "TextureSampleType" => TEXTURE_SAMPLE_TYPE,
    "TextureViewDimension" => TEXTURE_VIEW_DIMENSION,
    "VertexFormat" => VERTEX_FORMAT,
    "VertexStepMode" => VERTEX_STEP_MODE,
};
