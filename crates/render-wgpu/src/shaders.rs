/// WGSL shader for translated, tinted, textured sprite quads.
pub const SPRITE_SHADER: &str = r#"
struct Uniforms {
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;
@group(0) @binding(1)
var sprite_texture: texture_2d<f32>;
@group(0) @binding(2)
var sprite_sampler: sampler;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) tex_coord: vec2<f32>,
};

struct InstanceInput {
    @location(2) translate: vec2<f32>,
    @location(3) tint: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tex_coord: vec2<f32>,
    @location(1) tint: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    var out: VertexOutput;
    let world = vertex.position + instance.translate;
    out.clip_position = uniforms.projection * vec4<f32>(world, 0.0, 1.0);
    out.tex_coord = vertex.tex_coord;
    out.tint = instance.tint;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let sampled = textureSample(sprite_texture, sprite_sampler, in.tex_coord);
    return vec4<f32>(in.tint, 1.0) * sampled;
}
"#;
